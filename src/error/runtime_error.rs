#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while computing a result.
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The operator is not one of `+ - * /`.
    #[error("Unsupported operator '{operator}': expected one of + - * /.")]
    UnsupportedOperator {
        /// The rejected operator text.
        operator: String,
    },
    /// The value cannot be written as a Roman numeral under the ceiling.
    #[error("Result {value} is out of range: Roman numerals here express 1 to {max}.")]
    OutOfRange {
        /// The value that could not be rendered.
        value: i64,
        /// The configured ceiling.
        max:   i64,
    },
}
