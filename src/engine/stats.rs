use crate::engine::token::Token;

/// Aggregate counters for one tokenization pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stats {
    /// Non-break tokens, fillers included.
    pub token_count: usize,
    /// Tokens containing at least one letter.
    pub word_count: usize,
    /// Characters of original input, line breaks as written.
    pub char_count: usize,
    pub alpha_num_count: usize,
    pub letter_count: usize,
    /// `alpha_num_count / token_count`, one decimal place.
    pub average_word_length: f64,
    /// First token with the strictly greatest alphanumeric length.
    pub longest_word: Option<Token>,
}

/// Folds a token sequence into [`Stats`] in a single pass.
pub fn accumulate(tokens: &[Token]) -> Stats {
    let mut stats = Stats::default();
    let mut longest_len = 0;

    for token in tokens {
        stats.char_count += token.source_len();

        if token.is_break() {
            continue;
        }

        stats.token_count += 1;
        if token.letter_length > 0 {
            stats.word_count += 1;
        }
        stats.alpha_num_count += token.alpha_num_length;
        stats.letter_count += token.letter_length;

        if token.alpha_num_length > longest_len {
            longest_len = token.alpha_num_length;
            stats.longest_word = Some(token.clone());
        }
    }

    stats.average_word_length = average_length(stats.alpha_num_count, stats.token_count);
    stats
}

fn average_length(alpha_num_count: usize, token_count: usize) -> f64 {
    if alpha_num_count == 0 || token_count == 0 {
        return 0.0;
    }
    let average = alpha_num_count as f64 / token_count as f64;
    (average * 10.0).round() / 10.0
}
