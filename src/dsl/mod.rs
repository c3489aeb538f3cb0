//! DSL front-end: source text → tokens → classified tokens → AST.

pub mod analyzer;
pub mod array;
pub mod ast;
pub mod builtins;
pub mod error;
pub mod expression;
pub mod lexer;
pub mod metadata;
pub mod parser;
pub mod provider;
pub mod token;

pub use ast::*;
pub use error::{CompileError, ErrorKind};
pub use token::{Token, TokenKind};

use crate::codegen::{Generator, GeneratorOptions};
use analyzer::Analyzer;
use lexer::Lexer;
use parser::Parser;

/// The waml compiler.
///
/// Runs source text through tokenizer → analyzer → parser → generator.
/// Every call builds its own pipeline; nothing is shared between calls.
pub struct Compiler;

impl Compiler {
    /// Tokenize and classify DSL source.
    pub fn tokenize(source: &str) -> Vec<Token> {
        Analyzer::classify(Lexer::new(source).tokenize())
    }

    /// Parse DSL source into a Program AST.
    pub fn parse(source: &str) -> Result<Program, CompileError> {
        Self::parse_with(source, &GeneratorOptions::default())
    }

    /// Parse DSL source, rejecting instance names that would clash with
    /// identifiers generated under `options`.
    pub fn parse_with(source: &str, options: &GeneratorOptions) -> Result<Program, CompileError> {
        let mut parser = Parser::with_context(Self::tokenize(source), &options.context);
        parser.parse()
    }

    /// Parse and generate script with the default options.
    pub fn compile(source: &str) -> Result<String, CompileError> {
        Self::compile_with(source, &GeneratorOptions::default())
    }

    /// Parse and generate script with explicit generator options.
    pub fn compile_with(source: &str, options: &GeneratorOptions) -> Result<String, CompileError> {
        let program = Self::parse_with(source, options)?;
        Ok(Generator::new(options.clone()).generate(&program))
    }
}
