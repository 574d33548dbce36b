//! Syntax validation for expressions

use super::CliError;
use crate::evaluate;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The expression to validate
    pub expression: String,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Expression reduces to a single value
    SyntaxValid,
}

/// Validate an expression without a caller-supplied value.
///
/// The expression is run once with `x = 0`. Structure does not depend on the
/// value of `x`, and non-finite results are not errors, so this only fails on
/// malformed input.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    evaluate(&options.expression, 0.0)?;
    Ok(CheckResult::SyntaxValid)
}
