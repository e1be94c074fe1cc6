use tracing::debug;

use crate::{
    config::Config,
    error::{Error, ParseError},
    interpreter::{
        arithmetic::apply,
        numeral::{Classifier, NumeralSystem},
    },
};

/// A classified `operand operator operand` triple.
///
/// Both operands share one numeral system and their values are already in
/// range. An `Expression` lives for a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'a> {
    /// Numeral system of both operands.
    pub system:   NumeralSystem,
    /// Value of the first operand.
    pub left:     i64,
    /// The operator exactly as written.
    pub operator: &'a str,
    /// Value of the second operand.
    pub right:    i64,
}

/// Evaluates single-line expressions such as `VII + III` or `10 - 3`.
///
/// The evaluator holds nothing but its [`Config`], so it can be copied freely
/// and shared between threads; evaluating the same line always gives the
/// same answer.
///
/// # Example
/// ```
/// use numerus::{config::Config, interpreter::evaluator::Evaluator};
///
/// let evaluator = Evaluator::new(Config::basic());
/// assert_eq!(evaluator.evaluate("VII + III").unwrap(), "X");
/// assert_eq!(evaluator.evaluate("10 - 3").unwrap(), "7");
/// assert!(evaluator.evaluate("IX * II").is_err());
///
/// let extended = Evaluator::new(Config::extended());
/// assert_eq!(extended.evaluate("IX * II").unwrap(), "XVIII");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluator {
    config:     Config,
    classifier: Classifier,
}

impl Evaluator {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config,
               classifier: Classifier::new(config) }
    }

    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Evaluates one line and renders the result in the numeral system of its
    /// operands.
    ///
    /// # Errors
    /// - [`ParseError::Format`] unless the line holds exactly three
    ///   space-separated tokens.
    /// - [`ParseError::Operand`] if an operand is not a numeral in range.
    /// - [`ParseError::MixedSystems`] if one operand is Arabic and the other
    ///   Roman.
    /// - [`RuntimeError::DivisionByZero`](crate::error::RuntimeError) and
    ///   [`RuntimeError::UnsupportedOperator`](crate::error::RuntimeError)
    ///   from the arithmetic.
    /// - [`RuntimeError::OutOfRange`](crate::error::RuntimeError) if a Roman
    ///   result cannot be written as a Roman numeral.
    pub fn evaluate(&self, line: &str) -> Result<String, Error> {
        let expression = self.parse(line)?;
        let result = apply(expression.left, expression.right, expression.operator)?;
        let rendered = expression.system.render(result, self.config.max_value())?;

        debug!(line, result, rendered = %rendered, "evaluated expression");
        Ok(rendered)
    }

    /// Splits and classifies a line without computing it.
    ///
    /// The operator is not inspected here; an unsupported operator is only
    /// reported once the operands have been accepted.
    ///
    /// # Errors
    /// Returns the [`ParseError`] variants listed on [`Evaluator::evaluate`].
    ///
    /// # Example
    /// ```
    /// use numerus::{
    ///     config::Config,
    ///     interpreter::{evaluator::Evaluator, numeral::NumeralSystem},
    /// };
    ///
    /// let expression = Evaluator::new(Config::basic()).parse("IV * II").unwrap();
    /// assert_eq!(expression.system, NumeralSystem::Roman);
    /// assert_eq!((expression.left, expression.right), (4, 2));
    /// assert_eq!(expression.operator, "*");
    /// ```
    pub fn parse<'a>(&self, line: &'a str) -> Result<Expression<'a>, ParseError> {
        let tokens: Vec<&str> = line.trim().split(' ').collect();
        let [left, operator, right] = tokens[..] else {
            return Err(ParseError::Format { found: tokens.len() });
        };

        let left_system = self.classify(left)?;
        let right_system = self.classify(right)?;
        if left_system != right_system {
            return Err(ParseError::MixedSystems { left:  left_system,
                                                  right: right_system, });
        }

        Ok(Expression { system: left_system,
                        left: self.classifier.value_of(left, left_system)?,
                        operator,
                        right: self.classifier.value_of(right, right_system)? })
    }

    fn classify(&self, token: &str) -> Result<NumeralSystem, ParseError> {
        self.classifier
            .classify(token)
            .ok_or_else(|| ParseError::Operand { token: token.to_string(),
                                                 max:   self.config.max_value(), })
    }
}
