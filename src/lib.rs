//! # numerus
//!
//! numerus is a three-token calculator for Arabic and Roman numerals.
//! It reads expressions such as `VII + III` or `10 - 3`, checks that both
//! operands are numerals of the same system and of the accepted range, and
//! answers in that same system.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{config::Config, error::Error, interpreter::evaluator::Evaluator};

/// Numeral range and Roman policy.
///
/// This module declares the `Config` every evaluator is built from: the
/// largest accepted numeral (10 in the basic variant, 3999 in the extended
/// one) and whether Roman operands must be written in canonical form.
///
/// # Responsibilities
/// - Validates the ceiling against what Roman numerals can express.
/// - Provides the basic and extended presets.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every way an evaluation can fail, from a malformed
/// line to a Roman result that cannot be written down. Each error carries the
/// offending token or value so it can be reported to the user as is.
///
/// # Responsibilities
/// - Defines error enums for input shape, arithmetic and configuration
///   failures.
/// - Produces human-readable messages for each failure.
pub mod error;
/// Orchestrates the evaluation of one expression.
///
/// This module ties together the lexer, numeral classification, Roman
/// conversion and arithmetic, and exposes the `Evaluator` that runs them in
/// order.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides the entry point for evaluating a line.
/// - Manages the flow of values and errors between phases.
pub mod interpreter;

/// Evaluates one expression under the given configuration.
///
/// This is a convenience wrapper around [`Evaluator::evaluate`]. The result is
/// written in the numeral system of the operands.
///
/// # Errors
/// Returns an error if the line is malformed, an operand is invalid, the
/// operands mix numeral systems, the operator is unsupported, the divisor is
/// zero, or a Roman result is out of range.
///
/// # Examples
/// ```
/// use numerus::{config::Config, evaluate};
///
/// assert_eq!(evaluate("VII + III", Config::basic()).unwrap(), "X");
/// assert_eq!(evaluate("10 / 3", Config::basic()).unwrap(), "3");
///
/// // Arabic and Roman operands cannot be combined.
/// assert!(evaluate("V + 3", Config::basic()).is_err());
/// ```
pub fn evaluate(line: &str, config: Config) -> Result<String, Error> {
    Evaluator::new(config).evaluate(line)
}
