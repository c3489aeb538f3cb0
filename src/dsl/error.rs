//! Error types for the waml compiler.

use std::fmt;

use super::token::Token;

/// An error that occurred during compilation.
///
/// Every error carries the line and starting column of the token that
/// triggered it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    pub message: String,
    pub line: usize,
    pub col: usize,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnexpectedToken,
    UnknownProperty,
    UnknownBuiltin,
    AlreadyDefined,
    UndefinedReference,
    AnonymousExport,
    ExhaustedInput,
    NestingTooDeep,
    ReservedName,
}

impl CompileError {
    fn at(kind: ErrorKind, message: String, token: &Token) -> Self {
        Self {
            message,
            line: token.line,
            col: token.start_column(),
            kind,
        }
    }

    pub fn unexpected_token(token: &Token) -> Self {
        Self::at(
            ErrorKind::UnexpectedToken,
            format!("unexpected token '{}'", token.text),
            token,
        )
    }

    pub fn unknown_node_type(token: &Token) -> Self {
        Self::at(
            ErrorKind::UnexpectedToken,
            format!("unknown node type '{}'", token.text),
            token,
        )
    }

    pub fn unknown_property(token: &Token, class: &str) -> Self {
        Self::at(
            ErrorKind::UnknownProperty,
            format!("unknown property '{}' for {class}", token.text),
            token,
        )
    }

    pub fn unknown_builtin(token: &Token) -> Self {
        Self::at(
            ErrorKind::UnknownBuiltin,
            format!("unknown builtin '{}'", token.text),
            token,
        )
    }

    pub fn already_defined(token: &Token) -> Self {
        Self::at(
            ErrorKind::AlreadyDefined,
            format!("object '{}' is already defined", token.text),
            token,
        )
    }

    pub fn undefined_reference(token: &Token) -> Self {
        Self::at(
            ErrorKind::UndefinedReference,
            format!("undefined reference '{}'", token.text),
            token,
        )
    }

    pub fn anonymous_export(class: &Token) -> Self {
        Self::at(
            ErrorKind::AnonymousExport,
            format!("cannot export anonymous {}", class.text),
            class,
        )
    }

    pub fn nesting_too_deep(token: &Token, limit: usize) -> Self {
        Self::at(
            ErrorKind::NestingTooDeep,
            format!("expression nested deeper than {limit} levels"),
            token,
        )
    }

    pub fn reserved_name(token: &Token) -> Self {
        Self::at(
            ErrorKind::ReservedName,
            format!("name '{}' is reserved for generated code", token.text),
            token,
        )
    }

    pub fn exhausted_input(eof: &Token) -> Self {
        Self::at(
            ErrorKind::ExhaustedInput,
            "unexpected end of input".to_string(),
            eof,
        )
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{}] {:?}: {}",
            self.line, self.col, self.kind, self.message
        )
    }
}

impl std::error::Error for CompileError {}
