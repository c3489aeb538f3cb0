//! Node-type registry.
//!
//! Maps each definable class to its properties and the shape of value each
//! property accepts. The parser consults this table both to reject unknown
//! properties and to pick the grammar for a property's value.

use std::fmt;

use serde::Serialize;

/// The shape of value a property accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// A string literal, copied verbatim.
    String,
    /// An arithmetic expression.
    Expression,
    /// A literal array or an array comprehension.
    Array,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Constant,
    Oscillator,
    PeriodicWave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Value,
    Detune,
    Frequency,
    Type,
    PeriodicWave,
    Real,
    Img,
}

const CONSTANT_PROPERTIES: &[Property] = &[Property::Value];
const OSCILLATOR_PROPERTIES: &[Property] = &[
    Property::Detune,
    Property::Frequency,
    Property::Type,
    Property::PeriodicWave,
];
const PERIODIC_WAVE_PROPERTIES: &[Property] = &[Property::Real, Property::Img];

impl NodeKind {
    /// Resolve a class token's text.
    pub fn from_class(name: &str) -> Option<Self> {
        match name {
            "Constant" => Some(Self::Constant),
            "Oscillator" => Some(Self::Oscillator),
            "PeriodicWave" => Some(Self::PeriodicWave),
            _ => None,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Constant => "Constant",
            Self::Oscillator => "Oscillator",
            Self::PeriodicWave => "PeriodicWave",
        }
    }

    /// Properties accepted by this node type, in declaration order.
    pub fn properties(self) -> &'static [Property] {
        match self {
            Self::Constant => CONSTANT_PROPERTIES,
            Self::Oscillator => OSCILLATOR_PROPERTIES,
            Self::PeriodicWave => PERIODIC_WAVE_PROPERTIES,
        }
    }

    /// Look up a property of this node type by its source name.
    pub fn property(self, name: &str) -> Option<Property> {
        self.properties()
            .iter()
            .copied()
            .find(|p| p.name() == name)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl Property {
    /// Name as written in source and in generated accessors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Detune => "detune",
            Self::Frequency => "frequency",
            Self::Type => "type",
            Self::PeriodicWave => "periodicWave",
            Self::Real => "real",
            Self::Img => "img",
        }
    }

    pub fn shape(self) -> ValueShape {
        match self {
            Self::Type => ValueShape::String,
            Self::Real | Self::Img => ValueShape::Array,
            Self::Value | Self::Detune | Self::Frequency | Self::PeriodicWave => {
                ValueShape::Expression
            }
        }
    }
}
