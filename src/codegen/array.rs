//! Array writer: literal arrays and comprehensions.
//!
//! A comprehension renders as an immediately-invoked function that loops
//! the bound variable over its range and collects the body's values.

use crate::dsl::ast::ArrayValue;

use super::expression::render_expression;

#[derive(Debug, Default)]
pub struct ArrayWriter {
    fragments: Vec<String>,
    items: usize,
}

impl ArrayWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_array(&mut self) {
        self.items = 0;
        self.fragments.push("[".to_string());
    }

    pub fn write_item(&mut self, item: impl Into<String>) {
        if self.items > 0 {
            self.fragments.push(",".to_string());
        }
        self.items += 1;
        self.fragments.push(item.into());
    }

    pub fn end_array(&mut self) {
        self.fragments.push("]".to_string());
    }

    pub fn begin_comprehension(&mut self, variable: &str) {
        self.fragments
            .push(format!("(function(){{var _{variable}=[];"));
    }

    pub fn write_loop(&mut self, variable: &str, from: &str, to: &str, body: &str) {
        self.fragments.push(format!(
            "for(var {variable}={from};{variable}<{to};++{variable}){{_{variable}.push({body});}}"
        ));
    }

    pub fn end_comprehension(&mut self, variable: &str) {
        self.fragments.push(format!("return _{variable};}})()"));
    }

    pub fn write_array(&mut self, array: &ArrayValue) {
        match array {
            ArrayValue::Literal(items) => {
                self.begin_array();
                for item in items {
                    self.write_item(render_expression(item));
                }
                self.end_array();
            }
            ArrayValue::Comprehension {
                variable,
                from,
                to,
                body,
            } => {
                self.begin_comprehension(variable);
                self.write_loop(
                    variable,
                    &render_expression(from),
                    &render_expression(to),
                    &render_expression(body),
                );
                self.end_comprehension(variable);
            }
        }
    }

    pub fn finish(self) -> String {
        self.fragments.concat()
    }
}

/// Render one array through a fresh writer.
pub fn render_array(array: &ArrayValue) -> String {
    let mut writer = ArrayWriter::new();
    writer.write_array(array);
    writer.finish()
}
