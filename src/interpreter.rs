//! Applies operation descriptors to a single subject value.
//!
//! Both entry points are pure. A malformed descriptor expression surfaces as
//! [`EvalError::MalformedExpression`]; every other numeric edge case (division
//! by zero, `sqrt` of a negative) follows IEEE-754.

use crate::{
    ast::{Action, OpKind, Operation},
    evaluator::{EvalError, evaluate},
};

/// Tolerance used by `==` and `!=` conditions.
pub const EQUALITY_EPSILON: f64 = 1e-10;

/// Transforms `value` according to `op`.
///
/// Comparison kinds and unrecognized kinds leave the value unchanged.
///
/// # Examples
///
/// ```
/// use turbo_expr::ast::{OpKind, Operation};
/// use turbo_expr::evaluate_operation;
///
/// let op = Operation::structured(OpKind::Multiply, 3.0);
/// assert_eq!(evaluate_operation(&op, 5.0).unwrap(), 15.0);
///
/// let op = Operation::expression("x * x");
/// assert_eq!(evaluate_operation(&op, 4.0).unwrap(), 16.0);
/// ```
pub fn evaluate_operation(op: &Operation, value: f64) -> Result<f64, EvalError> {
    let (kind, operand) = match &op.action {
        Action::Expression(text) => return evaluate(text, value),
        Action::Structured { kind, operand } => (*kind, *operand),
    };

    Ok(match kind {
        Some(OpKind::Add) => value + operand,
        Some(OpKind::Subtract) => value - operand,
        Some(OpKind::Multiply) => value * operand,
        Some(OpKind::Divide) => value / operand,
        Some(OpKind::Power) => value.powf(operand),
        Some(OpKind::Sqrt) => value.sqrt(),
        Some(OpKind::Abs) => value.abs(),
        _ => value,
    })
}

/// Tests `value` against `op`.
///
/// An expression is true when it evaluates to anything other than zero
/// (NaN counts as true). Arithmetic and unrecognized kinds are false.
///
/// # Examples
///
/// ```
/// use turbo_expr::ast::{OpKind, Operation};
/// use turbo_expr::evaluate_condition;
///
/// let op = Operation::structured(OpKind::Equal, 1.0);
/// assert!(evaluate_condition(&op, 1.0 + 5e-11).unwrap());
/// assert!(!evaluate_condition(&op, 1.0 + 1e-9).unwrap());
/// ```
pub fn evaluate_condition(op: &Operation, value: f64) -> Result<bool, EvalError> {
    let (kind, operand) = match &op.action {
        Action::Expression(text) => return evaluate(text, value).map(|result| result != 0.0),
        Action::Structured { kind, operand } => (*kind, *operand),
    };

    Ok(match kind {
        Some(OpKind::Greater) => value > operand,
        Some(OpKind::Less) => value < operand,
        Some(OpKind::GreaterEqual) => value >= operand,
        Some(OpKind::LessEqual) => value <= operand,
        Some(OpKind::Equal) => (value - operand).abs() < EQUALITY_EPSILON,
        Some(OpKind::NotEqual) => (value - operand).abs() >= EQUALITY_EPSILON,
        _ => false,
    })
}
