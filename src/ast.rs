//! # Syntax and descriptor types
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Binary operators with precedence and IEEE-754 application
//! - **[operation]** - Operation descriptors built from untyped boundary data
//!
//! ## Expressions
//!
//! An expression is infix arithmetic over numeric literals and the single
//! variable `x`:
//!
//! ```text
//! x^2 + 2*x + 1
//! (x - 3) / 4.5
//! ```
//!
//! Precedence is `^` over `*` `/` over `+` `-`. Every operator is
//! left-associative, `^` included, so `2^3^2` is `(2^3)^2`.
//!
//! ## Descriptors
//!
//! A descriptor either names an operator with an operand or carries an
//! expression:
//!
//! ```text
//! { "op": ">", "value": 0 }
//! { "expr": "x * x" }
//! ```
pub mod operation;
pub mod operators;
pub mod tokens;

pub use operation::{Action, DescriptorError, OpKind, Operation};
pub use operators::BinOp;
pub use tokens::Token;
