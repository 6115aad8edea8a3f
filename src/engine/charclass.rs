// Character classes used by the tokenizer and the length counters

/// Extended-alphabet code point ranges counted as letters, inclusive.
///
/// Covers Latin-1 and extended Latin, Greek, Cyrillic, Armenian, Hebrew,
/// Arabic, Syriac, Thaana, NKo, Samaritan, Mandaic, Devanagari and Bengali.
/// The Arabic-Indic and Devanagari/Bengali digit blocks sit inside these
/// ranges and therefore count as letters, not digits.
const EXTENDED_LETTERS: &[(char, char)] = &[
    ('\u{00ad}', '\u{00ad}'),
    // Extended Latin
    ('\u{00c0}', '\u{00d6}'),
    ('\u{00d8}', '\u{00f6}'),
    ('\u{00d8}', '\u{01bf}'),
    // Greek and Russian
    ('\u{01c4}', '\u{02af}'),
    ('\u{0370}', '\u{0373}'),
    ('\u{0376}', '\u{0377}'),
    ('\u{037b}', '\u{037d}'),
    ('\u{0386}', '\u{0386}'),
    ('\u{0388}', '\u{038a}'),
    ('\u{038c}', '\u{038c}'),
    ('\u{038e}', '\u{03a1}'),
    ('\u{03a3}', '\u{0481}'),
    ('\u{048a}', '\u{0527}'),
    // Armenian
    ('\u{0531}', '\u{0556}'),
    ('\u{0561}', '\u{0587}'),
    // Hebrew
    ('\u{05d0}', '\u{05ea}'),
    ('\u{05f0}', '\u{05f2}'),
    // Arabic
    ('\u{0620}', '\u{064a}'),
    ('\u{0660}', '\u{0669}'),
    ('\u{066d}', '\u{06d3}'),
    ('\u{06f0}', '\u{06fc}'),
    ('\u{0710}', '\u{072f}'),
    ('\u{074d}', '\u{07a5}'),
    // Thaana
    ('\u{07c0}', '\u{07ea}'),
    ('\u{0800}', '\u{0815}'),
    // Mandaic & Arabic Extended
    ('\u{0840}', '\u{0858}'),
    ('\u{08a0}', '\u{08b2}'),
    // Devanagari
    ('\u{0904}', '\u{0939}'),
    ('\u{0958}', '\u{0961}'),
    ('\u{0966}', '\u{096f}'),
    ('\u{0972}', '\u{097f}'),
    // Bengali
    ('\u{0985}', '\u{098c}'),
    ('\u{098f}', '\u{0990}'),
    ('\u{0993}', '\u{09a8}'),
    ('\u{09aa}', '\u{09b0}'),
    ('\u{09b2}', '\u{09b2}'),
    ('\u{09b6}', '\u{09b9}'),
    ('\u{09dc}', '\u{09e1}'),
    ('\u{09e6}', '\u{09f1}'),
];

/// Apostrophes that join contractions like "don't" and "Bob’s".
const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

pub fn is_letter(c: char) -> bool {
    if c.is_ascii_alphabetic() {
        return true;
    }
    if c.is_ascii() {
        return false;
    }
    EXTENDED_LETTERS
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&c))
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_alpha_num(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// Word class for boundary detection: letters, digits, underscore, and an
/// apostrophe directly after a letter or digit (`before`). Apostrophes keep
/// contractions whole but are never counted.
pub fn is_word_char(c: char, before: Option<char>) -> bool {
    if APOSTROPHES.contains(&c) {
        return before.is_some_and(is_alpha_num);
    }
    is_alpha_num(c) || c == '_'
}

/// Characters that always start a new token.
pub fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '\0' || c == '_'
}

/// Counts (letters + digits, letters) in one scan.
pub fn count_classes(text: &str) -> (usize, usize) {
    text.chars().fold((0, 0), |(alpha_num, letters), c| {
        if is_letter(c) {
            (alpha_num + 1, letters + 1)
        } else if is_digit(c) {
            (alpha_num + 1, letters)
        } else {
            (alpha_num, letters)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_letters_and_digits() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(!is_letter('5'));
        assert!(is_digit('5'));
        assert!(!is_digit('x'));
    }

    #[test]
    fn test_extended_latin_is_letter() {
        assert!(is_letter('é'));
        assert!(is_letter('Ø'));
        assert!(is_letter('ß'));
    }

    #[test]
    fn test_multiplication_sign_is_not_letter() {
        // U+00D7 sits between the two Latin-1 letter ranges
        assert!(!is_letter('×'));
        assert!(!is_letter('÷'));
    }

    #[test]
    fn test_greek_cyrillic_hebrew_are_letters() {
        assert!(is_letter('λ'));
        assert!(is_letter('Ж'));
        assert!(is_letter('ש'));
    }

    #[test]
    fn test_cjk_is_not_letter() {
        assert!(!is_letter('漢'));
        assert!(!is_alpha_num('漢'));
    }

    #[test]
    fn test_soft_hyphen_is_letter() {
        assert!(is_letter('\u{00ad}'));
    }

    #[test]
    fn test_arabic_indic_digits_count_as_letters() {
        assert!(is_letter('\u{0663}'));
        assert!(!is_digit('\u{0663}'));
    }

    #[test]
    fn test_apostrophes_are_word_chars_but_not_counted() {
        assert!(is_word_char('\'', Some('n')));
        assert!(is_word_char('’', Some('b')));
        assert!(is_word_char('x', None));
        assert!(!is_alpha_num('\''));
        assert_eq!(count_classes("don't"), (4, 4));
    }

    #[test]
    fn test_opening_quote_is_not_word_char() {
        assert!(!is_word_char('\'', None));
        assert!(!is_word_char('\'', Some(' ')));
        assert!(!is_word_char('’', Some('(')));
    }

    #[test]
    fn test_delimiters() {
        assert!(is_delimiter(' '));
        assert!(is_delimiter('\t'));
        assert!(is_delimiter('\n'));
        assert!(is_delimiter('\0'));
        assert!(is_delimiter('_'));
        assert!(!is_delimiter('-'));
    }

    #[test]
    fn test_count_classes_mixed() {
        assert_eq!(count_classes("abc123!?"), (6, 3));
        assert_eq!(count_classes(""), (0, 0));
        assert_eq!(count_classes("..."), (0, 0));
    }
}
