use crate::interpreter::numeral::NumeralSystem;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while reading an expression.
pub enum ParseError {
    /// The line did not split into exactly `operand operator operand`.
    #[error("Format error: expected `<operand> <operator> <operand>`, found {found} token(s).")]
    Format {
        /// The number of tokens actually found.
        found: usize,
    },
    /// A token is neither an Arabic nor a Roman numeral of the accepted range.
    #[error("Invalid operand '{token}': expected a numeral from 1 to {max}.")]
    Operand {
        /// The rejected token.
        token: String,
        /// The configured ceiling.
        max:   i64,
    },
    /// The two operands are written in different numeral systems.
    #[error("Mixed numeral systems: left operand is {left}, right operand is {right}.")]
    MixedSystems {
        /// System of the first operand.
        left:  NumeralSystem,
        /// System of the second operand.
        right: NumeralSystem,
    },
    /// A Roman numeral contains a character outside `IVXLCDM`.
    #[error("Invalid Roman numeral '{text}'.")]
    InvalidNumeral {
        /// The rejected text.
        text: String,
    },
}
