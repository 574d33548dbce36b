use thiserror::Error;

use crate::{
    ast::{BinOp, Token},
    lexer::Lexer,
};

/// Errors that can occur during expression evaluation.
///
/// Division by zero and out-of-domain powers are not errors; they produce
/// IEEE-754 infinities and NaN.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The input cannot be reduced to exactly one value
    #[error("malformed expression '{expression}': {reason}")]
    MalformedExpression { expression: String, reason: String },
}

/// Entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Open,
    Op(BinOp),
}

impl Pending {
    fn precedence(&self) -> u8 {
        match self {
            Pending::Open => 0,
            Pending::Op(op) => op.precedence(),
        }
    }
}

/// Two-stack infix evaluator.
///
/// One instance evaluates one expression for one value of `x`; both stacks
/// start empty and are dropped with the evaluator.
pub struct Evaluator<'a> {
    source: &'a str,
    x: f64,
    values: Vec<f64>,
    ops: Vec<Pending>,
    expect_operand: bool,
}

impl<'a> Evaluator<'a> {
    pub fn new(source: &'a str, x: f64) -> Self {
        Evaluator {
            source,
            x,
            values: Vec::new(),
            ops: Vec::new(),
            expect_operand: true,
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> EvalError {
        let reason = reason.into();
        log::debug!("rejecting expression {:?}: {}", self.source, reason);
        EvalError::MalformedExpression {
            expression: self.source.to_string(),
            reason,
        }
    }

    /// Runs the evaluation and returns the single remaining value.
    ///
    /// # Examples
    ///
    /// ```
    /// use turbo_expr::evaluator::Evaluator;
    ///
    /// let result = Evaluator::new("x * x + 1", 3.0).eval().unwrap();
    /// assert_eq!(result, 10.0);
    /// ```
    pub fn eval(mut self) -> Result<f64, EvalError> {
        let tokens = Lexer::new(self.source)
            .tokenize()
            .map_err(|e| self.malformed(e.to_string()))?;

        for token in tokens {
            self.step(token)?;
        }
        self.finish()
    }

    /// Numbers, `x` and `(` are only valid where an operand is expected;
    /// operators and `)` only after a complete operand.
    fn step(&mut self, token: Token) -> Result<(), EvalError> {
        match (token, self.expect_operand) {
            (Token::Number(n), true) => {
                self.values.push(n);
                self.expect_operand = false;
            }
            (Token::Variable, true) => {
                self.values.push(self.x);
                self.expect_operand = false;
            }
            (Token::LParen, true) => self.ops.push(Pending::Open),
            (Token::RParen, false) => self.close_paren()?,
            (Token::Plus, false) => self.push_operator(BinOp::Add)?,
            (Token::Minus, false) => self.push_operator(BinOp::Subtract)?,
            (Token::Star, false) => self.push_operator(BinOp::Multiply)?,
            (Token::Slash, false) => self.push_operator(BinOp::Divide)?,
            (Token::Caret, false) => self.push_operator(BinOp::Power)?,
            (token, true) => {
                return Err(self.malformed(format!("expected an operand, found '{token}'")));
            }
            (token, false) => {
                return Err(self.malformed(format!("expected an operator, found '{token}'")));
            }
        }
        Ok(())
    }

    fn push_operator(&mut self, op: BinOp) -> Result<(), EvalError> {
        while self
            .ops
            .last()
            .is_some_and(|top| top.precedence() >= op.precedence())
        {
            self.reduce()?;
        }
        self.ops.push(Pending::Op(op));
        self.expect_operand = true;
        Ok(())
    }

    fn close_paren(&mut self) -> Result<(), EvalError> {
        loop {
            match self.ops.last().copied() {
                None => return Err(self.malformed("unmatched ')'")),
                Some(Pending::Open) => {
                    self.ops.pop();
                    return Ok(());
                }
                Some(Pending::Op(_)) => self.reduce()?,
            }
        }
    }

    fn finish(mut self) -> Result<f64, EvalError> {
        if self.expect_operand {
            let reason = match self.ops.last() {
                Some(Pending::Op(op)) => format!("missing operand for '{}'", op.symbol()),
                Some(Pending::Open) => "unmatched '('".to_string(),
                None => "no value".to_string(),
            };
            return Err(self.malformed(reason));
        }

        while let Some(top) = self.ops.last().copied() {
            if top == Pending::Open {
                return Err(self.malformed("unmatched '('"));
            }
            self.reduce()?;
        }

        match self.values.as_slice() {
            [value] => Ok(*value),
            values => Err(self.malformed(format!(
                "expected one value, found {}",
                values.len()
            ))),
        }
    }

    /// Pops `b`, then `a`, then the operator, and pushes `a op b`.
    fn reduce(&mut self) -> Result<(), EvalError> {
        let op = match self.ops.pop() {
            Some(Pending::Op(op)) => op,
            _ => return Err(self.malformed("operator stack underflow")),
        };
        let (Some(b), Some(a)) = (self.values.pop(), self.values.pop()) else {
            return Err(self.malformed(format!("missing operand for '{}'", op.symbol())));
        };
        self.values.push(op.apply(a, b));
        Ok(())
    }
}

/// Evaluates an infix expression with the variable bound to `x`.
///
/// # Examples
///
/// ```
/// use turbo_expr::evaluate;
///
/// assert_eq!(evaluate("2+3*4", 0.0).unwrap(), 14.0);
/// assert_eq!(evaluate("2^3^2", 0.0).unwrap(), 64.0);
/// assert!(evaluate("(1+2", 0.0).is_err());
/// ```
pub fn evaluate(expression: &str, x: f64) -> Result<f64, EvalError> {
    log::trace!("evaluating {expression:?} with x = {x}");
    Evaluator::new(expression, x).eval()
}
