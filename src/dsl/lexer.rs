//! Tokenizer for the waml DSL.
//!
//! Splits source text into position-tagged [`RawToken`]s. The tokenizer
//! never rejects input: every character ends up either in a token or as a
//! separator, and all validation is left to the parser.

use super::token::{RawToken, TokenKind};

const QUOTE: char = '"';

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    current: String,
    tokens: Vec<RawToken>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 0,
            current: String::new(),
            tokens: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> Vec<RawToken> {
        while !self.is_at_end() {
            let ch = self.advance();

            if ch == QUOTE {
                self.push_pending();
                self.col += 1;
                self.lex_string();
            } else if ch == '\n' {
                self.push_pending();
                self.line += 1;
                self.col = 0;
            } else if ch.is_whitespace() {
                self.push_pending();
                self.col += 1;
            } else if let Some(kind) = TokenKind::punctuation(ch) {
                self.push_pending();
                self.col += 1;
                self.push(ch.to_string(), Some(kind));
            } else {
                self.current.push(ch);
                self.col += 1;
            }
        }

        // Source need not end with a separator
        self.push_pending();
        self.tokens
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Consume a string literal body after its opening quote.
    ///
    /// Newlines inside the literal advance the line counter and are dropped
    /// from the contents. An unterminated literal runs to end of input.
    fn lex_string(&mut self) {
        let mut contents = String::new();
        while !self.is_at_end() {
            let ch = self.advance();
            match ch {
                QUOTE => {
                    self.push(contents, Some(TokenKind::String));
                    self.col += 1;
                    return;
                }
                '\n' => {
                    self.line += 1;
                    self.col = 0;
                }
                _ => {
                    contents.push(ch);
                    self.col += 1;
                }
            }
        }
        self.push(contents, Some(TokenKind::String));
    }

    fn push_pending(&mut self) {
        if !self.current.is_empty() {
            let text = std::mem::take(&mut self.current);
            self.push(text, None);
        }
    }

    fn push(&mut self, text: String, kind: Option<TokenKind>) {
        self.tokens.push(RawToken {
            line: self.line,
            column: self.col,
            text,
            kind,
        });
    }
}

/// Convenience wrapper around [`Lexer::tokenize`].
pub fn tokenize(source: &str) -> Vec<RawToken> {
    Lexer::new(source).tokenize()
}
