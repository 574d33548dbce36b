//! JSON output for evaluation results.
//!
//! JSON has no encoding for infinities or NaN, so non-finite numbers are
//! written as the strings `"Infinity"`, `"-Infinity"` and `"NaN"`.
//!
//! # Examples
//!
//! ```
//! use turbo_expr::output::{number_to_json, to_json};
//!
//! assert_eq!(to_json(&number_to_json(14.0)), "14.0");
//! assert_eq!(to_json(&number_to_json(1.0 / 0.0)), "\"Infinity\"");
//! ```

use serde_json::Value;

/// Converts a numeric result to JSON.
pub fn number_to_json(n: f64) -> Value {
    match serde_json::Number::from_f64(n) {
        Some(number) => Value::Number(number),
        None if n.is_nan() => Value::String("NaN".to_string()),
        None if n > 0.0 => Value::String("Infinity".to_string()),
        None => Value::String("-Infinity".to_string()),
    }
}

/// Converts a condition result to JSON.
pub fn bool_to_json(b: bool) -> Value {
    Value::Bool(b)
}

/// Compact JSON text.
pub fn to_json(value: &Value) -> String {
    value.to_string()
}

/// JSON text with 2-space indentation.
pub fn to_json_pretty(value: &Value) -> String {
    format!("{value:#}")
}
