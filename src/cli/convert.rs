//! JSON text -> descriptor conversion

use super::CliError;
use crate::Operation;

/// Parse a descriptor from JSON text, rejecting blank input.
pub fn parse_descriptor(text: &str) -> Result<Operation, CliError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CliError::NoInput);
    }
    Ok(text.parse::<Operation>()?)
}
