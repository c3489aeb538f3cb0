//! Token classification.
//!
//! Assigns a [`TokenKind`] to every raw token based on its textual shape.
//! Classification is total: every raw token maps to exactly one token, in
//! the same order.

use super::token::{RawToken, Token, TokenKind};

/// Prefix marking a builtin constant or function, e.g. `@pi`, `@sin`.
pub const BUILTIN_SIGIL: char = '@';

pub struct Analyzer;

impl Analyzer {
    pub fn classify(raw: Vec<RawToken>) -> Vec<Token> {
        raw.into_iter().map(classify_token).collect()
    }
}

fn classify_token(raw: RawToken) -> Token {
    let kind = raw.kind.unwrap_or_else(|| classify_text(&raw.text));
    Token {
        line: raw.line,
        column: raw.column,
        text: raw.text,
        kind,
    }
}

fn classify_text(text: &str) -> TokenKind {
    let mut chars = text.chars();
    let first = chars.next();

    if let (Some(ch), None) = (first, chars.next()) {
        if let Some(kind) = TokenKind::punctuation(ch) {
            return kind;
        }
    }

    if is_number_literal(text) {
        return TokenKind::Number;
    }

    match first {
        Some(BUILTIN_SIGIL) => TokenKind::Builtin,
        Some(ch) if ch.is_uppercase() => TokenKind::Class,
        _ => TokenKind::Name,
    }
}

/// Matches `-?digits(.digits)?`.
fn is_number_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    all_digits(int) && frac.map_or(true, all_digits)
}
