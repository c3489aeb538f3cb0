//! Statement writer for top-level definitions.
//!
//! Each definition becomes a run of statements inside one immediately
//! invoked function that creates the audio context. Exported definitions
//! additionally get `get_<name>_<property>` / `set_<name>_<property>`
//! pairs on `this`.

use std::collections::HashMap;

use crate::dsl::ast::{Definition, Node};
use crate::dsl::metadata::{NodeKind, Property};

use super::array::render_array;
use super::GENERATED_PREFIX;
use super::expression::render_expression;

/// How an accessor reaches the value it exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessTarget {
    /// An `AudioParam`, read and written through `.value`.
    Param,
    /// A plain field on the node object.
    Field,
    /// The local variable itself.
    Variable,
}

pub struct ScriptWriter {
    context: String,
    statements: Vec<String>,
    counters: HashMap<NodeKind, usize>,
}

impl ScriptWriter {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            statements: Vec::new(),
            counters: HashMap::new(),
        }
    }

    /// Allocate a local identifier for an anonymous definition.
    pub fn generate_name(&mut self, kind: NodeKind) -> String {
        let counter = self.counters.entry(kind).or_insert(0);
        *counter += 1;
        format!("{GENERATED_PREFIX}{}_{}", kind.class_name(), counter)
    }

    /// `var <id>=<ctx>.<factory>(<args>);`
    pub fn write_instance(&mut self, id: &str, factory: &str, args: &str) {
        let statement = format!("var {id}={}.{factory}({args});", self.context);
        self.statements.push(statement);
    }

    pub fn write_constant(&mut self, id: &str, value: &str) {
        self.statements.push(format!("var {id}={value};"));
    }

    pub fn write_param(&mut self, parent: &str, property: Property, value: &str) {
        self.statements
            .push(format!("{parent}.{}.value={value};", property.name()));
    }

    /// `<parent>.<prop>=<literal>;` with the value quoted and escaped.
    pub fn write_string_field(&mut self, parent: &str, property: Property, value: &str) {
        let literal = serde_json::Value::from(value).to_string();
        self.statements
            .push(format!("{parent}.{}={literal};", property.name()));
    }

    pub fn write_call(&mut self, parent: &str, method: &str, args: &str) {
        self.statements.push(format!("{parent}.{method}({args});"));
    }

    pub fn write_accessors(&mut self, parent: &str, property: Property, target: AccessTarget) {
        let prop = property.name();
        let target = match target {
            AccessTarget::Param => format!("{parent}.{prop}.value"),
            AccessTarget::Field => format!("{parent}.{prop}"),
            AccessTarget::Variable => parent.to_string(),
        };
        self.statements.push(format!(
            "this.set_{parent}_{prop}=function(v){{{target}=v;}};"
        ));
        self.statements.push(format!(
            "this.get_{parent}_{prop}=function(){{return {target};}};"
        ));
    }

    pub fn write_definition(&mut self, definition: &Definition) {
        let id = match &definition.name {
            Some(name) => name.clone(),
            None => self.generate_name(definition.node.kind()),
        };
        let accessors = definition.exported && !definition.is_anonymous();

        match &definition.node {
            Node::Constant(constant) => {
                self.write_constant(&id, &render_expression(&constant.value));
                if accessors {
                    self.write_accessors(&id, Property::Value, AccessTarget::Variable);
                }
            }
            Node::Oscillator(osc) => {
                self.write_instance(&id, "createOscillator", "");
                if let Some(detune) = &osc.detune {
                    self.write_param(&id, Property::Detune, &render_expression(detune));
                }
                self.write_param(&id, Property::Frequency, &render_expression(&osc.frequency));
                // A periodic wave sets the type to "custom" itself
                match &osc.periodic_wave {
                    Some(wave) => self.write_call(&id, "setPeriodicWave", &render_expression(wave)),
                    None => self.write_string_field(&id, Property::Type, &osc.wave_type),
                }
                self.write_call(&id, "start", "");
                if accessors {
                    self.write_accessors(&id, Property::Detune, AccessTarget::Param);
                    self.write_accessors(&id, Property::Frequency, AccessTarget::Param);
                    self.write_accessors(&id, Property::Type, AccessTarget::Field);
                }
            }
            Node::PeriodicWave(wave) => {
                let args = format!(
                    "new Float32Array({}),new Float32Array({})",
                    render_array(&wave.real),
                    render_array(&wave.img)
                );
                self.write_instance(&id, "createPeriodicWave", &args);
            }
        }
    }

    /// Wrap the statements in the context-creating preamble.
    pub fn finish(self) -> String {
        let mut out = String::from("(function(){\n");
        out.push_str(&format!(
            "var {}=new (window.AudioContext||window.webkitAudioContext)();\n",
            self.context
        ));
        for statement in &self.statements {
            out.push_str(statement);
            out.push('\n');
        }
        out.push_str("})();\n");
        out
    }
}
