//! Parser for the waml DSL.
//!
//! Parses the classified token stream into a [`Program`]:
//!
//! ```text
//! program      := definition*
//! definition   := CLASS (NAME | CLASS)? '{' propertyList? '}' 'export'?
//! propertyList := property (',' property)*
//! property     := NAME ':' (STRING | array | expression)
//! ```
//!
//! A definition's name becomes referenceable only once the whole
//! definition has parsed, so definitions cannot refer to themselves or to
//! anything defined after them.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::codegen::{DEFAULT_CONTEXT, GENERATED_PREFIX};

use super::array::{parse_array_comprehension, parse_array_literal};
use super::ast::*;
use super::error::{CompileError, ErrorKind};
use super::expression::{parse_expression, Scope};
use super::metadata::{NodeKind, ValueShape};
use super::provider::TokenProvider;
use super::token::{Token, TokenKind};

const EXPORT_KEYWORD: &str = "export";

const INSTANCE_NAME: [TokenKind; 2] = [TokenKind::Name, TokenKind::Class];

pub struct Parser {
    tokens: TokenProvider,
    definitions: HashSet<String>,
    /// Audio-context identifier the generated script will declare.
    context: String,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_context(tokens, DEFAULT_CONTEXT)
    }

    /// Parser that also rejects `context` as an instance name.
    pub fn with_context(tokens: Vec<Token>, context: &str) -> Self {
        Self {
            tokens: TokenProvider::new(tokens),
            definitions: HashSet::new(),
            context: context.to_string(),
        }
    }

    pub fn parse(&mut self) -> Result<Program, CompileError> {
        let mut program = Program::default();
        while self.tokens.has_next() {
            program.definitions.push(self.parse_definition()?);
        }
        Ok(program)
    }

    fn parse_definition(&mut self) -> Result<Definition, CompileError> {
        let class = self.tokens.expect(TokenKind::Class)?;
        let kind = NodeKind::from_class(&class.text)
            .ok_or_else(|| CompileError::unknown_node_type(&class))?;

        let name = if self.tokens.peek_if_either(&INSTANCE_NAME).is_some() {
            let token = self.tokens.next()?;
            if self.is_reserved(&token.text) {
                return Err(CompileError::reserved_name(&token));
            }
            if self.definitions.contains(&token.text) {
                return Err(CompileError::already_defined(&token));
            }
            Some(token.text)
        } else {
            None
        };

        let mut node = Node::new(kind);
        self.parse_property_list(&mut node)?;

        let exported = self
            .tokens
            .peek_if(TokenKind::Name)
            .is_some_and(|t| t.is_keyword(EXPORT_KEYWORD));
        if exported {
            if name.is_none() {
                return Err(CompileError::anonymous_export(&class));
            }
            self.tokens.next()?;
        }

        // Bind the name last so the body cannot reference it
        if let Some(name) = &name {
            self.definitions.insert(name.clone());
        }

        debug!(
            class = %kind,
            name = name.as_deref().unwrap_or("<anonymous>"),
            exported,
            "parsed definition"
        );

        Ok(Definition {
            name,
            exported,
            node,
        })
    }

    /// Names the generated script declares itself.
    fn is_reserved(&self, name: &str) -> bool {
        name == self.context || name.starts_with(GENERATED_PREFIX)
    }

    fn parse_property_list(&mut self, node: &mut Node) -> Result<(), CompileError> {
        self.tokens.expect(TokenKind::LBrace)?;

        // Empty property lists are allowed
        if self.tokens.peek_if(TokenKind::RBrace).is_some() {
            self.tokens.next()?;
            return Ok(());
        }

        let kind = node.kind();
        loop {
            let name = self.tokens.expect(TokenKind::Name)?;
            let property = kind
                .property(&name.text)
                .ok_or_else(|| CompileError::unknown_property(&name, kind.class_name()))?;
            self.tokens.expect(TokenKind::Colon)?;

            let value = self.parse_value(property.shape())?;
            node.assign(property, value);

            let separator = self
                .tokens
                .expect_either(&[TokenKind::Comma, TokenKind::RBrace])?;
            if separator.kind == TokenKind::RBrace {
                return Ok(());
            }
        }
    }

    fn parse_value(&mut self, shape: ValueShape) -> Result<PropertyValue, CompileError> {
        let scope = Scope::new(&self.definitions);
        match shape {
            ValueShape::String => {
                let token = self.tokens.expect(TokenKind::String)?;
                Ok(PropertyValue::String(token.text))
            }
            ValueShape::Expression => {
                parse_expression(&mut self.tokens, &scope).map(PropertyValue::Expression)
            }
            ValueShape::Array => parse_array(&mut self.tokens, &scope).map(PropertyValue::Array),
        }
    }
}

/// Try the literal grammar first; on any failure rewind and parse a
/// comprehension instead, whose error (if any) is the one reported.
fn parse_array(tokens: &mut TokenProvider, scope: &Scope<'_>) -> Result<ArrayValue, CompileError> {
    let cursor = tokens.save();
    match parse_array_literal(tokens, scope) {
        Ok(array) => Ok(array),
        Err(err) if err.kind == ErrorKind::NestingTooDeep => Err(err),
        Err(err) => {
            trace!(
                line = err.line,
                col = err.col,
                "not an array literal, retrying as comprehension"
            );
            tokens.restore(cursor);
            parse_array_comprehension(tokens, scope)
        }
    }
}
