use crate::engine::config::SizeConfig;
use crate::engine::error::EngineError;
use crate::engine::size::scaled;
use crate::engine::stats::{accumulate, Stats};
use crate::engine::token::Token;
use crate::engine::tokenizer::tokenize;

/// A token with its bubble size, if it gets one.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub token: Token,
    pub size: Option<f64>,
}

/// Output of one tokenize, size and accumulate pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Analysis {
    pub bubbles: Vec<Bubble>,
    pub stats: Stats,
}

impl Analysis {
    /// Word bubbles with their sizes.
    pub fn words(&self) -> impl Iterator<Item = (&Token, f64)> {
        self.bubbles
            .iter()
            .filter_map(|b| b.size.map(|size| (&b.token, size)))
    }
}

/// Runs the full pipeline over `text`.
///
/// The config is validated once up front; nothing is computed for an invalid one.
pub fn analyze(text: &str, config: &SizeConfig) -> Result<Analysis, EngineError> {
    config.validate_scale()?;

    let tokens = tokenize(text);
    let stats = accumulate(&tokens);
    let bubbles: Vec<Bubble> = tokens
        .into_iter()
        .map(|token| {
            let size = token
                .is_word()
                .then(|| scaled(token.alpha_num_length, config));
            Bubble { token, size }
        })
        .collect();

    tracing::debug!(
        tokens = bubbles.len(),
        words = stats.word_count,
        law = %config.law,
        scale = config.scale,
        "analyzed text"
    );

    Ok(Analysis { bubbles, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::ScaleLaw;

    #[test]
    fn test_analyze_sizes_only_words() {
        let analysis = analyze("Hi, you!", &SizeConfig::default()).unwrap();
        let sizes: Vec<Option<f64>> = analysis.bubbles.iter().map(|b| b.size).collect();
        // "Hi" "," " you" "!"
        assert_eq!(sizes, vec![Some(2.5), None, Some(3.75), None]);
        assert_eq!(analysis.words().count(), 2);
    }

    #[test]
    fn test_analyze_includes_stats() {
        let analysis = analyze("Hello, world! 2024", &SizeConfig::default()).unwrap();
        assert_eq!(analysis.stats.token_count, 5);
        assert_eq!(analysis.stats.alpha_num_count, 14);
    }

    #[test]
    fn test_analyze_empty_text() {
        let analysis = analyze("", &SizeConfig::default()).unwrap();
        assert!(analysis.bubbles.is_empty());
        assert_eq!(analysis.stats, Stats::default());
    }

    #[test]
    fn test_analyze_rejects_invalid_scale() {
        let config = SizeConfig::new(ScaleLaw::Quadratic, -2.0, 1.0);
        assert!(matches!(
            analyze("text", &config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_analyze_breaks_have_no_size() {
        let analysis = analyze("a\nb", &SizeConfig::default()).unwrap();
        assert!(analysis.bubbles[1].token.is_break());
        assert_eq!(analysis.bubbles[1].size, None);
    }
}
