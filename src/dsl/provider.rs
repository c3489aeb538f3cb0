//! Cursor over the classified token stream.
//!
//! Offers lookahead, expectation with failure, and backtracking through
//! copyable [`Cursor`] values: a parse attempt saves the cursor, and on
//! failure the caller restores it and tries another grammar.

use super::error::CompileError;
use super::token::{Token, TokenKind};

/// A saved position in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(usize);

pub struct TokenProvider {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenProvider {
    /// Wrap classified tokens, appending an end-of-stream marker positioned
    /// where the last token ends.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let (line, column) = tokens.last().map_or((1, 0), |t| (t.line, t.column));
        tokens.push(Token {
            line,
            column,
            text: String::new(),
            kind: TokenKind::Eof,
        });
        Self { tokens, pos: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.tokens.len() - 1
    }

    pub fn next(&mut self) -> Result<Token, CompileError> {
        if !self.has_next() {
            return Err(CompileError::exhausted_input(self.eof()));
        }
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        Ok(token)
    }

    pub fn peek(&self) -> Option<&Token> {
        if self.has_next() {
            Some(&self.tokens[self.pos])
        } else {
            None
        }
    }

    pub fn peek_if(&self, kind: TokenKind) -> Option<&Token> {
        self.peek().filter(|t| t.kind == kind)
    }

    pub fn peek_if_either(&self, kinds: &[TokenKind]) -> Option<&Token> {
        self.peek().filter(|t| kinds.contains(&t.kind))
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, CompileError> {
        self.expect_either(&[kind])
    }

    pub fn expect_either(&mut self, kinds: &[TokenKind]) -> Result<Token, CompileError> {
        let matches = match self.peek() {
            Some(t) => kinds.contains(&t.kind),
            None => return Err(CompileError::exhausted_input(self.eof())),
        };
        if matches {
            self.next()
        } else {
            Err(CompileError::unexpected_token(&self.tokens[self.pos]))
        }
    }

    pub fn save(&self) -> Cursor {
        Cursor(self.pos)
    }

    pub fn restore(&mut self, cursor: Cursor) {
        self.pos = cursor.0;
    }

    fn eof(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }
}
