//! `@`-prefixed builtin constants and math functions.

use serde::Serialize;

/// What a builtin token resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Builtin {
    /// Replaced by its numeric value at parse time.
    Constant(f64),
    /// Applied to one parenthesized argument.
    Function(MathFunction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MathFunction {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Abs,
    Exp,
    Log,
    Floor,
    Ceil,
    Round,
}

impl MathFunction {
    /// Name of the equivalent function in the generated script.
    pub fn script_name(self) -> &'static str {
        match self {
            Self::Sin => "Math.sin",
            Self::Cos => "Math.cos",
            Self::Tan => "Math.tan",
            Self::Sqrt => "Math.sqrt",
            Self::Abs => "Math.abs",
            Self::Exp => "Math.exp",
            Self::Log => "Math.log",
            Self::Floor => "Math.floor",
            Self::Ceil => "Math.ceil",
            Self::Round => "Math.round",
        }
    }
}

/// Resolve builtin token text (including the sigil).
pub fn lookup(text: &str) -> Option<Builtin> {
    let builtin = match text {
        "@pi" => Builtin::Constant(std::f64::consts::PI),
        "@e" => Builtin::Constant(std::f64::consts::E),
        "@sin" => Builtin::Function(MathFunction::Sin),
        "@cos" => Builtin::Function(MathFunction::Cos),
        "@tan" => Builtin::Function(MathFunction::Tan),
        "@sqrt" => Builtin::Function(MathFunction::Sqrt),
        "@abs" => Builtin::Function(MathFunction::Abs),
        "@exp" => Builtin::Function(MathFunction::Exp),
        "@log" => Builtin::Function(MathFunction::Log),
        "@floor" => Builtin::Function(MathFunction::Floor),
        "@ceil" => Builtin::Function(MathFunction::Ceil),
        "@round" => Builtin::Function(MathFunction::Round),
        _ => return None,
    };
    Some(builtin)
}
