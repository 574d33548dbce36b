use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Named operations a structured descriptor can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    // Arithmetic
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `sqrt`, ignores the operand
    Sqrt,
    /// `abs`, ignores the operand
    Abs,

    // Comparison
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `==`, within [`crate::interpreter::EQUALITY_EPSILON`]
    Equal,
    /// `!=`, outside [`crate::interpreter::EQUALITY_EPSILON`]
    NotEqual,
}

impl OpKind {
    pub const ALL: [OpKind; 13] = [
        OpKind::Add,
        OpKind::Subtract,
        OpKind::Multiply,
        OpKind::Divide,
        OpKind::Power,
        OpKind::Sqrt,
        OpKind::Abs,
        OpKind::Greater,
        OpKind::Less,
        OpKind::GreaterEqual,
        OpKind::LessEqual,
        OpKind::Equal,
        OpKind::NotEqual,
    ];

    /// Looks up the kind for a boundary tag such as `"+"` or `"sqrt"`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        OpKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            OpKind::Add => "+",
            OpKind::Subtract => "-",
            OpKind::Multiply => "*",
            OpKind::Divide => "/",
            OpKind::Power => "^",
            OpKind::Sqrt => "sqrt",
            OpKind::Abs => "abs",
            OpKind::Greater => ">",
            OpKind::Less => "<",
            OpKind::GreaterEqual => ">=",
            OpKind::LessEqual => "<=",
            OpKind::Equal => "==",
            OpKind::NotEqual => "!=",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What a descriptor does to its subject value.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A named operator applied with `operand`.
    ///
    /// `kind` is `None` when the tag was absent or not recognized; the
    /// interpreter then falls back to identity / `false`.
    Structured { kind: Option<OpKind>, operand: f64 },

    /// A free-form infix expression over `x`.
    Expression(String),
}

/// An operation descriptor.
///
/// Built once from boundary data and never mutated. A non-empty expression
/// always wins over `op`/`value`, so the choice between the two modes is
/// made here rather than at every evaluation.
///
/// # Examples
///
/// ```
/// use turbo_expr::ast::{Action, OpKind, Operation};
/// use serde_json::json;
///
/// let op = Operation::from_json(&json!({ "op": "*", "value": 3 })).unwrap();
/// assert_eq!(op.action, Action::Structured { kind: Some(OpKind::Multiply), operand: 3.0 });
///
/// let op = Operation::from_json(&json!({ "op": "+", "expr": "x * 2" })).unwrap();
/// assert_eq!(op.action, Action::Expression("x * 2".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub action: Action,

    /// Passthrough label (grouping keys and the like). Never read by the
    /// interpreter.
    pub field: Option<String>,
}

/// Errors raised while turning boundary data into an [`Operation`].
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Input was not an object, or a key held the wrong JSON type
    #[error("invalid operation descriptor: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Untyped boundary shape. Every key is optional and `null` counts as unset.
#[derive(Debug, Deserialize)]
struct RawOperation {
    op: Option<String>,
    value: Option<f64>,
    field: Option<String>,
    expr: Option<String>,
}

impl Operation {
    /// Descriptor that leaves values unchanged and matches nothing.
    pub fn identity() -> Self {
        Operation {
            action: Action::Structured {
                kind: None,
                operand: 0.0,
            },
            field: None,
        }
    }

    pub fn structured(kind: OpKind, operand: f64) -> Self {
        Operation {
            action: Action::Structured {
                kind: Some(kind),
                operand,
            },
            field: None,
        }
    }

    /// Builds an expression descriptor. An empty string yields the identity
    /// descriptor, the same as an empty `expr` key would.
    pub fn expression(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Operation::identity();
        }
        Operation {
            action: Action::Expression(text),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Builds a descriptor from an untyped object with the optional keys
    /// `op`, `value`, `field` and `expr`.
    ///
    /// Missing keys are fine; a non-object or a wrongly typed key is not.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, DescriptorError> {
        // serde would also accept a positional array for a struct
        if !value.is_object() {
            return Err(DescriptorError::Invalid(serde::de::Error::custom(format!(
                "expected an object, found {value}"
            ))));
        }
        let raw = RawOperation::deserialize(value)?;
        Ok(Operation::from_raw(raw))
    }

    fn from_raw(raw: RawOperation) -> Self {
        let field = raw.field;

        if let Some(text) = raw.expr.filter(|e| !e.is_empty()) {
            return Operation {
                action: Action::Expression(text),
                field,
            };
        }

        let kind = match raw.op.as_deref() {
            None | Some("") => None,
            Some(tag) => {
                let kind = OpKind::from_tag(tag);
                if kind.is_none() {
                    log::debug!("unrecognized operation kind {tag:?}, falling back to identity");
                }
                kind
            }
        };

        Operation {
            action: Action::Structured {
                kind,
                operand: raw.value.unwrap_or(0.0),
            },
            field,
        }
    }
}

impl Default for Operation {
    fn default() -> Self {
        Operation::identity()
    }
}

impl FromStr for Operation {
    type Err = DescriptorError;

    /// Parses a descriptor from JSON text, e.g. `{"op": ">", "value": 0}`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        Operation::from_json(&value)
    }
}
