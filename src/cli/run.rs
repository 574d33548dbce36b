//! Evaluate expressions and descriptors for the CLI

use serde_json::Value;

use super::CliError;
use crate::{
    Operation, evaluate, evaluate_condition, evaluate_operation,
    output::{bool_to_json, number_to_json},
};

/// A single evaluation requested on the command line
#[derive(Debug, Clone)]
pub enum Command {
    /// Evaluate an expression with `x` bound to `value`
    Eval { expression: String, value: f64 },
    /// Transform `value` with a descriptor
    Apply { operation: Operation, value: f64 },
    /// Test `value` against a descriptor
    Test { operation: Operation, value: f64 },
}

/// Run a command and return its result as JSON
pub fn execute(command: &Command) -> Result<Value, CliError> {
    let output = match command {
        Command::Eval { expression, value } => number_to_json(evaluate(expression, *value)?),
        Command::Apply { operation, value } => {
            number_to_json(evaluate_operation(operation, *value)?)
        }
        Command::Test { operation, value } => {
            bool_to_json(evaluate_condition(operation, *value)?)
        }
    };
    Ok(output)
}
