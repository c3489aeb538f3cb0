//! waml: compiler for the Web Audio Markup Language.
//!
//! Turns declarative audio-graph definitions into a JavaScript fragment
//! that builds the equivalent Web Audio nodes.

pub mod cli;
pub mod codegen;
pub mod config;
pub mod dsl;
pub mod logging;

pub use dsl::{CompileError, Compiler};

/// Compile waml source into JavaScript with the default options.
pub fn compile(source: &str) -> Result<String, CompileError> {
    Compiler::compile(source)
}
