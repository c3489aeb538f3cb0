//! Abstract Syntax Tree for the waml DSL.

use serde::Serialize;

use super::builtins::MathFunction;
use super::metadata::{NodeKind, Property};
use super::token::TokenKind;

/// A complete program: definitions in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Program {
    pub definitions: Vec<Definition>,
}

/// A top-level definition, named or anonymous.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Definition {
    pub name: Option<String>,
    pub exported: bool,
    pub node: Node,
}

impl Definition {
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Constant(ConstantNode),
    Oscillator(OscillatorNode),
    PeriodicWave(PeriodicWaveNode),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstantNode {
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OscillatorNode {
    pub detune: Option<Expr>,
    pub frequency: Expr,
    pub wave_type: String,
    pub periodic_wave: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodicWaveNode {
    pub real: ArrayValue,
    pub img: ArrayValue,
}

/// A parsed property value, shaped by the property's metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Expression(Expr),
    Array(ArrayValue),
}

impl Node {
    /// A node of the given kind with every property at its default.
    pub fn new(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Constant => Node::Constant(ConstantNode {
                value: Expr::Number(0.0),
            }),
            NodeKind::Oscillator => Node::Oscillator(OscillatorNode {
                detune: None,
                frequency: Expr::Number(440.0),
                wave_type: "sine".to_string(),
                periodic_wave: None,
            }),
            NodeKind::PeriodicWave => Node::PeriodicWave(PeriodicWaveNode {
                real: ArrayValue::Literal(Vec::new()),
                img: ArrayValue::Literal(Vec::new()),
            }),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Constant(_) => NodeKind::Constant,
            Node::Oscillator(_) => NodeKind::Oscillator,
            Node::PeriodicWave(_) => NodeKind::PeriodicWave,
        }
    }

    /// Store a parsed property value.
    ///
    /// The parser only hands over properties taken from this node's
    /// metadata, with values parsed according to their declared shape.
    pub fn assign(&mut self, property: Property, value: PropertyValue) {
        use PropertyValue as V;

        match (self, property, value) {
            (Node::Constant(n), Property::Value, V::Expression(e)) => n.value = e,
            (Node::Oscillator(n), Property::Detune, V::Expression(e)) => n.detune = Some(e),
            (Node::Oscillator(n), Property::Frequency, V::Expression(e)) => n.frequency = e,
            (Node::Oscillator(n), Property::Type, V::String(s)) => n.wave_type = s,
            (Node::Oscillator(n), Property::PeriodicWave, V::Expression(e)) => {
                n.periodic_wave = Some(e)
            }
            (Node::PeriodicWave(n), Property::Real, V::Array(a)) => n.real = a,
            (Node::PeriodicWave(n), Property::Img, V::Array(a)) => n.img = a,
            (node, property, value) => unreachable!(
                "{} cannot hold {} = {value:?}",
                node.kind(),
                property.name()
            ),
        }
    }
}

/// An arithmetic expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Number(f64),
    Reference(String),
    /// Right-nested: `a - b - c` is `a - (b - c)`, with no precedence
    /// between operators.
    Operation {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    FunctionCall {
        function: MathFunction,
        arg: Box<Expr>,
    },
    /// Explicit parentheses.
    Inner(Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// An array-valued property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ArrayValue {
    Literal(Vec<Expr>),
    /// `[variable, from to to, body]`: evaluates `body` for each
    /// `variable` in the half-open range `from..to`.
    Comprehension {
        variable: String,
        from: Expr,
        to: Expr,
        body: Expr,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oscillator_defaults() {
        let node = Node::new(NodeKind::Oscillator);
        match node {
            Node::Oscillator(osc) => {
                assert_eq!(osc.frequency, Expr::Number(440.0));
                assert_eq!(osc.wave_type, "sine");
                assert!(osc.detune.is_none());
                assert!(osc.periodic_wave.is_none());
            }
            other => panic!("expected oscillator, got {other:?}"),
        }
    }

    #[test]
    fn assign_overwrites() {
        let mut node = Node::new(NodeKind::Oscillator);
        node.assign(
            Property::Type,
            PropertyValue::String("square".to_string()),
        );
        node.assign(
            Property::Type,
            PropertyValue::String("triangle".to_string()),
        );
        node.assign(Property::Detune, PropertyValue::Expression(Expr::Number(5.0)));
        match node {
            Node::Oscillator(osc) => {
                assert_eq!(osc.wave_type, "triangle");
                assert_eq!(osc.detune, Some(Expr::Number(5.0)));
            }
            other => panic!("expected oscillator, got {other:?}"),
        }
    }

    #[test]
    fn node_kind_matches_constructor() {
        for kind in [NodeKind::Constant, NodeKind::Oscillator, NodeKind::PeriodicWave] {
            assert_eq!(Node::new(kind).kind(), kind);
        }
    }

    #[test]
    fn operators_from_tokens() {
        assert_eq!(Operator::from_token(TokenKind::Star), Some(Operator::Mul));
        assert_eq!(Operator::from_token(TokenKind::Arrow), None);
        assert_eq!(Operator::Div.symbol(), "/");
    }

    #[test]
    fn anonymous_definition() {
        let def = Definition {
            name: None,
            exported: false,
            node: Node::new(NodeKind::Constant),
        };
        assert!(def.is_anonymous());
    }
}
