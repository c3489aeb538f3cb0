//! Inline expression writer.

use crate::dsl::ast::Expr;

/// Accumulates the fragments of one inline expression.
#[derive(Debug, Default)]
pub struct ExpressionWriter {
    fragments: Vec<String>,
}

impl ExpressionWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_generic(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    pub fn begin_inner(&mut self) {
        self.fragments.push("(".to_string());
    }

    pub fn end_inner(&mut self) {
        self.fragments.push(")".to_string());
    }

    pub fn begin_function(&mut self, name: &str) {
        self.fragments.push(format!("{name}("));
    }

    pub fn end_function(&mut self) {
        self.end_inner();
    }

    pub fn write_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Number(value) => self.write_generic(format_number(*value)),
            Expr::Reference(name) => self.write_generic(name.as_str()),
            Expr::Operation { op, left, right } => {
                self.write_expr(left);
                self.write_generic(op.symbol());
                self.write_expr(right);
            }
            Expr::FunctionCall { function, arg } => {
                self.begin_function(function.script_name());
                self.write_expr(arg);
                self.end_function();
            }
            Expr::Inner(inner) => {
                self.begin_inner();
                self.write_expr(inner);
                self.end_inner();
            }
        }
    }

    pub fn finish(self) -> String {
        self.fragments.concat()
    }
}

/// Render one expression through a fresh writer.
pub fn render_expression(expr: &Expr) -> String {
    let mut writer = ExpressionWriter::new();
    writer.write_expr(expr);
    writer.finish()
}

/// Format a number as a script literal.
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else {
        value.to_string()
    }
}
