//! # CampusBot Expression Evaluator
//!
//! File: cli/src/eval.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Parses expressions such as `2 + 2`, `(3 + 4) * 2`, `2 ^ 10`, `sqrt(16) / 2`
//! and evaluates them to an `f64`. Supports `+ - * / %`, exponentiation with
//! `^` or `**` (right-associative), unary signs, parentheses, the constants
//! `pi` and `e`, and the functions `sqrt abs sin cos tan ln log`.
//!
//! Any input that is not a well-formed expression yields an `EvalError`,
//! including expressions nested deeper than `MAX_DEPTH`.
//!
//! ## Examples
//!
//! ```rust,ignore
//! assert_eq!(eval::evaluate("(3 + 4) * 2")?, 14.0);
//! assert_eq!(eval::format_number(10.0 / 4.0), "2.5");
//! ```

use std::fmt;
use thiserror::Error;

/// Maximum nesting of parentheses, unary signs and exponents.
pub const MAX_DEPTH: usize = 256;

/// Error type for expression parsing and evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("Empty expression")]
    Empty,
    #[error("Unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),
    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Result is not a finite number")]
    NonFinite,
    #[error("Expression nested deeper than {0} levels")]
    TooDeep(usize),
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::Caret => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Evaluate an arithmetic expression.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;

    if let Some(token) = parser.peek() {
        return Err(match token {
            Token::RParen => EvalError::UnbalancedParentheses,
            other => EvalError::UnexpectedToken(other.to_string()),
        });
    }
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

/// Render a result without float noise: at most ten decimals, trailing
/// zeros dropped, integers printed without a decimal point.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.10}", value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(literal.clone()))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = String::new();
                while let Some(&a) = chars.peek() {
                    if a.is_ascii_alphanumeric() || a == '_' {
                        name.push(a.to_ascii_lowercase());
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(name));
            }
            '*' => {
                chars.next();
                if chars.peek() == Some(&'*') {
                    chars.next();
                    tokens.push(Token::Caret);
                } else {
                    tokens.push(Token::Star);
                }
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' | '−' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '×' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' | '÷' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '%' => {
                chars.next();
                tokens.push(Token::Percent);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Caret);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            other => return Err(EvalError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

/// Recursive-descent parser that evaluates as it goes.
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := unary (('*' | '/' | '%') unary)*
/// unary   := ('+' | '-') unary | power
/// power   := primary ('^' unary)?
/// primary := number | constant | function '(' expr ')' | '(' expr ')'
/// ```
///
/// Every nested level passes through `unary`, which bounds the recursion.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let divisor = self.unary()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= divisor;
                }
                Some(Token::Percent) => {
                    self.pos += 1;
                    let divisor = self.unary()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value %= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        let value = self.signed();
        self.depth -= 1;
        value
    }

    fn signed(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(-self.unary()?)
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, EvalError> {
        let base = self.primary()?;
        if self.peek() == Some(&Token::Caret) {
            self.pos += 1;
            // Right-associative: 2^3^2 == 2^(3^2).
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.expr()?;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(EvalError::UnbalancedParentheses),
                }
            }
            Some(Token::Ident(name)) => self.identifier(&name),
            Some(Token::RParen) => Err(EvalError::UnbalancedParentheses),
            Some(other) => Err(EvalError::UnexpectedToken(other.to_string())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn identifier(&mut self, name: &str) -> Result<f64, EvalError> {
        match name {
            "pi" => return Ok(std::f64::consts::PI),
            "e" => return Ok(std::f64::consts::E),
            _ => {}
        }

        let function: fn(f64) -> f64 = match name {
            "sqrt" => f64::sqrt,
            "abs" => f64::abs,
            "sin" => f64::sin,
            "cos" => f64::cos,
            "tan" => f64::tan,
            "ln" => f64::ln,
            "log" => f64::log10,
            _ => return Err(EvalError::UnknownIdentifier(name.to_string())),
        };

        match self.next() {
            Some(Token::LParen) => {}
            Some(other) => return Err(EvalError::UnexpectedToken(other.to_string())),
            None => return Err(EvalError::UnexpectedEnd),
        }
        let argument = self.expr()?;
        match self.next() {
            Some(Token::RParen) => Ok(function(argument)),
            _ => Err(EvalError::UnbalancedParentheses),
        }
    }
}
