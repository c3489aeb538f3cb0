//! Token types for the waml lexer.

use serde::Serialize;

/// A token as produced by the tokenizer, before classification.
///
/// Only string literals carry a kind at this stage; everything else is
/// classified later by the [`Analyzer`](super::analyzer::Analyzer).
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken {
    pub line: usize,
    pub column: usize,
    pub text: String,
    pub kind: Option<TokenKind>,
}

/// A classified token.
///
/// `column` is the index within `line` at which the token text ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub line: usize,
    pub column: usize,
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    /// Column at which the token text starts, used for error positions.
    pub fn start_column(&self) -> usize {
        self.column.saturating_sub(self.text.chars().count())
    }

    /// Whether this is a bare name with exactly the given text.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Name && self.text == keyword
    }
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Arrow, // >
    Colon,
    Plus,
    Minus,
    Star,
    Slash,

    // Literals and identifiers
    String,
    Number,
    Name,    // lower-case leading
    Class,   // upper-case leading, names a node type
    Builtin, // @-prefixed

    // Appended by the token provider
    Eof,
}

impl TokenKind {
    /// Look up a single-character punctuation token.
    pub fn punctuation(ch: char) -> Option<Self> {
        let kind = match ch {
            '(' => Self::LParen,
            ')' => Self::RParen,
            '{' => Self::LBrace,
            '}' => Self::RBrace,
            '[' => Self::LBracket,
            ']' => Self::RBracket,
            ',' => Self::Comma,
            '>' => Self::Arrow,
            ':' => Self::Colon,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Star,
            '/' => Self::Slash,
            _ => return None,
        };
        Some(kind)
    }
}
