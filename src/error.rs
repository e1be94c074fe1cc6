/// Input shape errors.
///
/// Defines the errors raised while splitting a line into tokens and
/// classifying its operands, before any arithmetic takes place. These cover a
/// wrong token count, operands that are not numerals of the accepted range,
/// and expressions that mix numeral systems.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised once both operands are known: division by zero,
/// operators outside `+ - * /`, and results that cannot be written in the
/// numeral system of the inputs.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Errors raised while building a [`Config`](crate::config::Config).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The numeral ceiling lies outside `1..=3999`.
    #[error("Invalid ceiling {value}: Roman numerals can only express values from 1 to 3999.")]
    InvalidCeiling {
        /// The rejected ceiling.
        value: i64,
    },
}

/// Any failure of a single evaluation.
///
/// Every variant is terminal for the current line only; callers report it and
/// carry on with the next one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line could not be turned into a well-formed expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression was well-formed but could not be computed or rendered.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
