/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Exponentiation (`^`)
    Power,
}

impl BinOp {
    /// Binding strength: `^` = 3, `*` `/` = 2, `+` `-` = 1.
    ///
    /// Open parentheses sit on the operator stack with precedence 0, so no
    /// operator ever pops past one.
    pub fn precedence(&self) -> u8 {
        match self {
            BinOp::Power => 3,
            BinOp::Multiply | BinOp::Divide => 2,
            BinOp::Add | BinOp::Subtract => 1,
        }
    }

    /// Computes `a op b` with IEEE-754 semantics.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            BinOp::Add => a + b,
            BinOp::Subtract => a - b,
            BinOp::Multiply => a * b,
            BinOp::Divide => a / b,
            BinOp::Power => a.powf(b),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Subtract => '-',
            BinOp::Multiply => '*',
            BinOp::Divide => '/',
            BinOp::Power => '^',
        }
    }
}
