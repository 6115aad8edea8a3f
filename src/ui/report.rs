//! Plain-text output for `--print` mode.

use crate::engine::{Analysis, Config};
use std::fmt::Write;

/// Stats block followed by one `[len] size word` line per bubble.
pub fn format_report(analysis: &Analysis, config: &Config) -> String {
    let stats = &analysis.stats;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "law: {}  scale: {:.1}  spacing: {:.1}",
        config.size.law, config.size.scale, config.size.spacing
    );
    let _ = writeln!(out, "tokens: {}", stats.token_count);
    let _ = writeln!(out, "words: {}", stats.word_count);
    let _ = writeln!(out, "chars: {}", stats.char_count);
    let _ = writeln!(out, "alphanumerics: {}", stats.alpha_num_count);
    let _ = writeln!(out, "letters: {}", stats.letter_count);
    let _ = writeln!(out, "average length: {:.1}", stats.average_word_length);
    match &stats.longest_word {
        Some(token) => {
            let _ = writeln!(out, "longest: [{}] {}", token.alpha_num_length, token.label());
        }
        None => {
            let _ = writeln!(out, "longest: -");
        }
    }

    if analysis.words().next().is_some() {
        out.push('\n');
    }
    for (token, size) in analysis.words() {
        let _ = writeln!(
            out,
            "[{:>2}] {:>7.2}  {}",
            token.alpha_num_length,
            size,
            token.label()
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::analyze;

    #[test]
    fn test_format_report_stats_and_bubbles() {
        let config = Config::default();
        let analysis = analyze("Hello, world! 2024", &config.size).unwrap();
        let report = format_report(&analysis, &config);

        assert!(report.contains("law: linear  scale: 5.0  spacing: 1.0"));
        assert!(report.contains("tokens: 5\nwords: 2\n"));
        assert!(report.contains("average length: 2.8"));
        assert!(report.contains("longest: [5] Hello"));
        assert!(report.contains("[ 5]    6.25  world"));
        assert!(report.contains("[ 4]    5.00  2024"));
    }

    #[test]
    fn test_format_report_empty() {
        let config = Config::default();
        let analysis = analyze("", &config.size).unwrap();
        let report = format_report(&analysis, &config);
        assert!(report.contains("tokens: 0\nwords: 0\n"));
        assert!(report.contains("longest: -"));
        assert!(report.ends_with("longest: -\n"));
    }
}
