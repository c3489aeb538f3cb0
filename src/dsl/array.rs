//! Array grammars.
//!
//! Two grammars share the `[` … `]` delimiters:
//!
//! ```text
//! literal       := '[' ']' | '[' expression (',' expression)* ']'
//! comprehension := '[' NAME ',' expression 'to' expression ',' expression ']'
//! ```
//!
//! Choosing between them is the caller's job; see
//! [`Parser`](super::parser::Parser) for the backtracking.

use super::ast::ArrayValue;
use super::error::CompileError;
use super::expression::{parse_expression, Scope};
use super::provider::TokenProvider;
use super::token::TokenKind;

/// Keyword separating a comprehension's bounds.
const RANGE_KEYWORD: &str = "to";

pub fn parse_array_literal(
    tokens: &mut TokenProvider,
    scope: &Scope<'_>,
) -> Result<ArrayValue, CompileError> {
    tokens.expect(TokenKind::LBracket)?;

    let mut items = Vec::new();
    if tokens.peek_if(TokenKind::RBracket).is_some() {
        tokens.next()?;
        return Ok(ArrayValue::Literal(items));
    }

    loop {
        items.push(parse_expression(tokens, scope)?);
        let separator = tokens.expect_either(&[TokenKind::Comma, TokenKind::RBracket])?;
        if separator.kind == TokenKind::RBracket {
            break;
        }
    }

    Ok(ArrayValue::Literal(items))
}

pub fn parse_array_comprehension(
    tokens: &mut TokenProvider,
    scope: &Scope<'_>,
) -> Result<ArrayValue, CompileError> {
    tokens.expect(TokenKind::LBracket)?;
    let variable = tokens.expect(TokenKind::Name)?.text;
    tokens.expect(TokenKind::Comma)?;

    let inner = scope.with_variable(&variable);
    let from = parse_expression(tokens, &inner)?;

    let keyword = tokens.expect(TokenKind::Name)?;
    if !keyword.is_keyword(RANGE_KEYWORD) {
        return Err(CompileError::unexpected_token(&keyword));
    }
    let to = parse_expression(tokens, &inner)?;

    tokens.expect(TokenKind::Comma)?;
    let body = parse_expression(tokens, &inner)?;
    tokens.expect(TokenKind::RBracket)?;

    Ok(ArrayValue::Comprehension {
        variable,
        from,
        to,
        body,
    })
}
