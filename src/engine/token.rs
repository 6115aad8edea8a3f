use crate::engine::charclass::count_classes;

/// Canonical newline marker kept in the token stream.
pub const NEWLINE: char = '\n';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Contains at least one letter or digit; gets a bubble.
    Word,
    /// A normalized line break.
    Break,
    /// Punctuation or whitespace remnant with nothing to count.
    Filler,
}

/// Line-break sequence a `Break` token replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    Lf,
    CrLf,
    Cr,
    VerticalTab,
    FormFeed,
}

impl LineBreak {
    pub fn as_str(self) -> &'static str {
        match self {
            LineBreak::Lf => "\n",
            LineBreak::CrLf => "\r\n",
            LineBreak::Cr => "\r",
            LineBreak::VerticalTab => "\u{000b}",
            LineBreak::FormFeed => "\u{000c}",
        }
    }

    /// Characters of original input this break covers.
    pub fn source_len(self) -> usize {
        match self {
            LineBreak::CrLf => 2,
            _ => 1,
        }
    }
}

/// One unit of tokenized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text with line breaks normalized to `\n`; leading whitespace is kept.
    pub text: String,
    pub kind: TokenKind,
    /// Letters plus digits.
    pub alpha_num_length: usize,
    pub letter_length: usize,
    /// Original sequence for `Break` tokens.
    pub line_break: Option<LineBreak>,
}

impl Token {
    /// Builds a non-break token and classifies it from its contents.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let (alpha_num_length, letter_length) = count_classes(&text);
        let kind = if alpha_num_length == 0 {
            TokenKind::Filler
        } else {
            TokenKind::Word
        };
        Self {
            text,
            kind,
            alpha_num_length,
            letter_length,
            line_break: None,
        }
    }

    pub fn line_break(original: LineBreak) -> Self {
        Self {
            text: NEWLINE.to_string(),
            kind: TokenKind::Break,
            alpha_num_length: 0,
            letter_length: 0,
            line_break: Some(original),
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_break(&self) -> bool {
        self.kind == TokenKind::Break
    }

    /// Text without the leading whitespace the token absorbed from its delimiter.
    pub fn label(&self) -> &str {
        self.text.trim_start_matches(|c: char| c.is_whitespace() || c == '\0')
    }

    /// Text as it appeared in the original input.
    pub fn source_text(&self) -> &str {
        match self.line_break {
            Some(original) => original.as_str(),
            None => &self.text,
        }
    }

    pub fn source_len(&self) -> usize {
        match self.line_break {
            Some(original) => original.source_len(),
            None => self.text.chars().count(),
        }
    }
}
