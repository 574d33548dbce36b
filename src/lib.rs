pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod interpreter;
pub mod lexer;
pub mod output;

pub use ast::{Action, BinOp, DescriptorError, OpKind, Operation, Token};
pub use evaluator::{EvalError, Evaluator, evaluate};
pub use interpreter::{EQUALITY_EPSILON, evaluate_condition, evaluate_operation};
pub use lexer::{LexError, Lexer};
pub use output::{to_json, to_json_pretty};
