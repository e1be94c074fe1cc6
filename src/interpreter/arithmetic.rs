use std::{fmt, str::FromStr};

use crate::{error::RuntimeError, interpreter::lexer::Token};

/// Represents one of the four supported binary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// Applies the operator to two integers.
    ///
    /// Division truncates toward zero. Operands are bounded by 3999, so none
    /// of the four operations can overflow an `i64`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] when dividing by zero.
    ///
    /// # Example
    /// ```
    /// use numerus::interpreter::arithmetic::Operator;
    ///
    /// assert_eq!(Operator::Div.apply(-7, 2).unwrap(), -3);
    /// assert!(Operator::Div.apply(7, 0).is_err());
    /// ```
    pub fn apply(self, left: i64, right: i64) -> Result<i64, RuntimeError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
        }
    }
}

impl FromStr for Operator {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Token::whole(s) {
            Some(Token::Plus) => Ok(Self::Add),
            Some(Token::Minus) => Ok(Self::Sub),
            Some(Token::Star) => Ok(Self::Mul),
            Some(Token::Slash) => Ok(Self::Div),
            _ => Err(RuntimeError::UnsupportedOperator { operator: s.to_string() }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

/// Applies the operator written as `operator` to two integers.
///
/// # Errors
/// Returns [`RuntimeError::UnsupportedOperator`] if `operator` is not one of
/// `+ - * /`, and [`RuntimeError::DivisionByZero`] when dividing by zero.
///
/// # Example
/// ```
/// use numerus::{error::RuntimeError, interpreter::arithmetic::apply};
///
/// assert_eq!(apply(6, 3, "*").unwrap(), 18);
/// assert_eq!(apply(6, 0, "/").unwrap_err(), RuntimeError::DivisionByZero);
/// assert!(matches!(apply(6, 3, "%"), Err(RuntimeError::UnsupportedOperator { .. })));
/// ```
pub fn apply(left: i64, right: i64, operator: &str) -> Result<i64, RuntimeError> {
    operator.parse::<Operator>()?.apply(left, right)
}
