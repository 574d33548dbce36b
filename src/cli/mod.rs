//! CLI support for turbo-expr
//!
//! Provides programmatic access to the `turbo-expr` binary's commands so they
//! can be embedded in other tools and tested without spawning a process.

mod check;
mod convert;
mod docs;
mod run;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::parse_descriptor;
pub use docs::get_ops_overview;
pub use run::{Command, execute};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Expression evaluation error
    #[error("Evaluation error: {0}")]
    Eval(#[from] crate::EvalError),
    /// Descriptor could not be read
    #[error("Descriptor error: {0}")]
    Descriptor(#[from] crate::DescriptorError),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No descriptor provided
    #[error("No operation provided. Use --op or pipe a JSON descriptor to stdin.")]
    NoInput,
}
