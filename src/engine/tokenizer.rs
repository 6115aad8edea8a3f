// Tokenizer - boundary scan over normalized text

use crate::engine::charclass::{is_alpha_num, is_delimiter, is_digit, is_word_char};
use crate::engine::token::{LineBreak, Token, NEWLINE};

/// Replaces every line-break sequence with `NEWLINE`, remembering the originals in order.
fn normalize_line_breaks(text: &str) -> (String, Vec<LineBreak>) {
    let mut normalized = String::with_capacity(text.len());
    let mut breaks = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let line_break = match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                Some(LineBreak::CrLf)
            }
            '\r' => Some(LineBreak::Cr),
            '\n' => Some(LineBreak::Lf),
            '\u{000b}' => Some(LineBreak::VerticalTab),
            '\u{000c}' => Some(LineBreak::FormFeed),
            _ => None,
        };

        match line_break {
            Some(original) => {
                normalized.push(NEWLINE);
                breaks.push(original);
            }
            None => normalized.push(c),
        }
    }

    (normalized, breaks)
}

/// Decides whether a token boundary falls between `prev` and `cur`.
///
/// `before` is the character ahead of `prev` and `next` the one after `cur`,
/// if any; apostrophes need the former to know their class. A "word boundary" is a
/// transition between word class and non-word class. Splits happen:
/// - before whitespace, `\0`, `_` and newlines, and after newlines
/// - before a hyphen that is not followed by a letter or digit
/// - at a word boundary before a hyphen that introduces a number ("x-5")
/// - at a word boundary before `.` or `,` not followed by a digit ("3.14" stays whole)
/// - at any other word boundary not followed by a letter or digit
fn is_split(before: Option<char>, prev: char, cur: char, next: Option<char>) -> bool {
    if prev == NEWLINE || is_delimiter(cur) {
        return true;
    }

    let next_is_alpha_num = next.is_some_and(is_alpha_num);
    let next_is_digit = next.is_some_and(is_digit);

    if cur == '-' && !next_is_alpha_num {
        return true;
    }

    if is_word_char(prev, before) == is_word_char(cur, Some(prev)) {
        return false;
    }

    match cur {
        '-' => next_is_digit,
        '.' | ',' => !next_is_digit,
        c => !is_alpha_num(c),
    }
}

fn push_piece(tokens: &mut Vec<Token>, piece: &str, breaks: &mut impl Iterator<Item = LineBreak>) {
    if piece.len() == NEWLINE.len_utf8() && piece.starts_with(NEWLINE) {
        tokens.push(Token::line_break(breaks.next().unwrap_or(LineBreak::Lf)));
    } else {
        tokens.push(Token::from_text(piece));
    }
}

/// Splits text into word, filler and break tokens.
///
/// Never drops characters: concatenating the token texts yields the input
/// with its line breaks normalized to `\n`, and [`restore`] yields the input
/// exactly. Whitespace becomes the leading character of the token that
/// follows it, so `"Hello, world"` gives `"Hello"`, `","` and `" world"`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let (normalized, breaks) = normalize_line_breaks(text);
    let mut breaks = breaks.into_iter();
    let chars: Vec<(usize, char)> = normalized.char_indices().collect();

    let mut tokens = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let (offset, cur) = chars[i];
        let prev = chars[i - 1].1;
        let before = i.checked_sub(2).map(|j| chars[j].1);
        let next = chars.get(i + 1).map(|&(_, c)| c);

        if is_split(before, prev, cur, next) {
            push_piece(&mut tokens, &normalized[start..offset], &mut breaks);
            start = offset;
        }
    }

    if start < normalized.len() {
        push_piece(&mut tokens, &normalized[start..], &mut breaks);
    }

    tokens
}

/// Rebuilds the original text, including its original line-break sequences.
pub fn restore(tokens: &[Token]) -> String {
    tokens.iter().map(Token::source_text).collect()
}
