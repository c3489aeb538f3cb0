//! Code generation: AST → JavaScript building the Web Audio graph.
//!
//! Definitions render through one [`ScriptWriter`]; nested expressions and
//! arrays render through throwaway [`ExpressionWriter`]s and
//! [`ArrayWriter`]s whose text is spliced into the statement.

pub mod array;
pub mod expression;
pub mod script;

pub use array::ArrayWriter;
pub use expression::ExpressionWriter;
pub use script::ScriptWriter;

use tracing::debug;

use crate::dsl::ast::Program;

/// Name of the generated audio-context local unless configured otherwise.
pub const DEFAULT_CONTEXT: &str = "audioCtx";

/// Prefix of identifiers allocated for anonymous definitions.
pub const GENERATED_PREFIX: &str = "__";

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    /// Identifier bound to the `AudioContext` in the generated script.
    pub context: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT.to_string(),
        }
    }
}

pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn generate(&self, program: &Program) -> String {
        let mut writer = ScriptWriter::new(self.options.context.as_str());
        for definition in &program.definitions {
            writer.write_definition(definition);
        }
        let script = writer.finish();
        debug!(
            definitions = program.definitions.len(),
            bytes = script.len(),
            "generated script"
        );
        script
    }
}
