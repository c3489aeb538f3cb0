//! Expression parser.
//!
//! ```text
//! expression := (NUMBER | NAME | CLASS | BUILTIN | '(' expression ')') (op expression)?
//! ```
//!
//! Everything after an operator is parsed as the right operand, so chains
//! nest to the right and all four operators share one precedence level.
//! Nesting is capped at [`MAX_NESTING`] levels, counting each operation,
//! parenthesis and builtin call around an operand.

use std::collections::HashSet;

use super::ast::{Expr, Operator};
use super::builtins::{self, Builtin};
use super::error::CompileError;
use super::provider::TokenProvider;
use super::token::{Token, TokenKind};

const EXPRESSION_START: [TokenKind; 5] = [
    TokenKind::Number,
    TokenKind::Name,
    TokenKind::Class,
    TokenKind::LParen,
    TokenKind::Builtin,
];

/// Deepest operation, parenthesis or call nesting an expression may reach.
pub const MAX_NESTING: usize = 256;

const OPERATORS: [TokenKind; 4] = [
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Slash,
];

/// Names an expression may reference.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    definitions: &'a HashSet<String>,
    variable: Option<&'a str>,
}

impl<'a> Scope<'a> {
    pub fn new(definitions: &'a HashSet<String>) -> Self {
        Self {
            definitions,
            variable: None,
        }
    }

    /// This scope plus a comprehension's loop variable.
    pub fn with_variable<'b>(&self, variable: &'b str) -> Scope<'b>
    where
        'a: 'b,
    {
        Scope {
            definitions: self.definitions,
            variable: Some(variable),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variable == Some(name) || self.definitions.contains(name)
    }
}

pub fn parse_expression(
    tokens: &mut TokenProvider,
    scope: &Scope<'_>,
) -> Result<Expr, CompileError> {
    parse_nested(tokens, scope, 0)
}

/// Parse an operator chain whose first operand sits `depth` levels deep.
///
/// The chain is read iteratively and folded into right-nested operations
/// afterwards; only parentheses and function calls recurse.
fn parse_nested(
    tokens: &mut TokenProvider,
    scope: &Scope<'_>,
    depth: usize,
) -> Result<Expr, CompileError> {
    let first = parse_operand(tokens, scope, depth)?;

    let mut rest: Vec<(Operator, Expr)> = Vec::new();
    while let Some(op) = tokens
        .peek_if_either(&OPERATORS)
        .and_then(|t| Operator::from_token(t.kind))
    {
        let token = tokens.next()?;
        // Operand n of a chain ends up n operations deep
        let operand_depth = depth + rest.len() + 1;
        if operand_depth > MAX_NESTING {
            return Err(CompileError::nesting_too_deep(&token, MAX_NESTING));
        }
        let operand = parse_operand(tokens, scope, operand_depth)?;
        rest.push((op, operand));
    }

    let mut tail: Option<(Operator, Expr)> = None;
    for (op, operand) in rest.into_iter().rev() {
        tail = Some(match tail {
            None => (op, operand),
            Some((next_op, right)) => (
                op,
                Expr::Operation {
                    op: next_op,
                    left: Box::new(operand),
                    right: Box::new(right),
                },
            ),
        });
    }

    Ok(match tail {
        None => first,
        Some((op, right)) => Expr::Operation {
            op,
            left: Box::new(first),
            right: Box::new(right),
        },
    })
}

fn parse_operand(
    tokens: &mut TokenProvider,
    scope: &Scope<'_>,
    depth: usize,
) -> Result<Expr, CompileError> {
    let start = tokens.expect_either(&EXPRESSION_START)?;

    match start.kind {
        TokenKind::Number => parse_number(&start),
        TokenKind::Builtin => parse_builtin(tokens, scope, &start, depth),
        TokenKind::LParen => {
            let inner = parse_nested(tokens, scope, descend(&start, depth)?)?;
            tokens.expect(TokenKind::RParen)?;
            Ok(Expr::Inner(Box::new(inner)))
        }
        _ => {
            if !scope.contains(&start.text) {
                return Err(CompileError::undefined_reference(&start));
            }
            Ok(Expr::Reference(start.text))
        }
    }
}

/// Depth of the expression nested under `token`, if within bounds.
fn descend(token: &Token, depth: usize) -> Result<usize, CompileError> {
    if depth >= MAX_NESTING {
        Err(CompileError::nesting_too_deep(token, MAX_NESTING))
    } else {
        Ok(depth + 1)
    }
}

fn parse_number(token: &Token) -> Result<Expr, CompileError> {
    token
        .text
        .parse()
        .map(Expr::Number)
        .map_err(|_| CompileError::unexpected_token(token))
}

fn parse_builtin(
    tokens: &mut TokenProvider,
    scope: &Scope<'_>,
    token: &Token,
    depth: usize,
) -> Result<Expr, CompileError> {
    match builtins::lookup(&token.text) {
        Some(Builtin::Constant(value)) => Ok(Expr::Number(value)),
        Some(Builtin::Function(function)) => {
            tokens.expect(TokenKind::LParen)?;
            let arg = parse_nested(tokens, scope, descend(token, depth)?)?;
            tokens.expect(TokenKind::RParen)?;
            Ok(Expr::FunctionCall {
                function,
                arg: Box::new(arg),
            })
        }
        None => Err(CompileError::unknown_builtin(token)),
    }
}
