use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    // Literals
    /// Numeric literal made of digits and at most one decimal point
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// .5
    /// ```
    Number(f64),

    /// The free variable, replaced by the subject value during evaluation
    ///
    /// # Examples
    /// ```text
    /// x
    /// x * x + 1
    /// ```
    Variable,

    // Operators
    /// Addition (`+`)
    Plus,

    /// Subtraction (`-`)
    ///
    /// Always binary. A leading minus has no left operand and is rejected.
    Minus,

    /// Multiplication (`*`)
    Star,

    /// Division (`/`)
    Slash,

    /// Exponentiation (`^`)
    ///
    /// # Examples
    /// ```text
    /// x^2
    /// 2^0.5
    /// ```
    Caret,

    // Delimiters
    /// Opening parenthesis
    LParen,

    /// Closing parenthesis
    RParen,

    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Variable => f.write_str("x"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::Caret => f.write_str("^"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Eof => f.write_str("end of input"),
        }
    }
}
