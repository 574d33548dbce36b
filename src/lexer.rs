use thiserror::Error;

use crate::ast::Token;

/// Errors raised while splitting an expression into tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A character that is not part of the expression grammar
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    /// A run of digits and dots that is not a valid number (`1.2.3`, `.`)
    #[error("invalid number literal '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consumes every consecutive digit or `.` and parses the run as one
    /// literal.
    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let mut literal = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() || ch == '.' {
                literal.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // only digits and dots get here: failures are "1.2.3" or a lone "."
        literal
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| LexError::InvalidNumber {
                literal,
                position: start,
            })
    }

    fn single(&mut self, token: Token) -> Result<Token, LexError> {
        self.advance();
        Ok(token)
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        match self.current_char() {
            None => Ok(Token::Eof),
            Some('x') => self.single(Token::Variable),
            Some('+') => self.single(Token::Plus),
            Some('-') => self.single(Token::Minus),
            Some('*') => self.single(Token::Star),
            Some('/') => self.single(Token::Slash),
            Some('^') => self.single(Token::Caret),
            Some('(') => self.single(Token::LParen),
            Some(')') => self.single(Token::RParen),
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.read_number(),
            Some(ch) => Err(LexError::UnexpectedChar {
                ch,
                position: self.position,
            }),
        }
    }

    /// Lexes the whole input. The trailing [`Token::Eof`] is not included.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token()? {
                Token::Eof => return Ok(tokens),
                token => tokens.push(token),
            }
        }
    }
}
