use std::fmt;

use tracing::debug;

use crate::{
    config::{Config, RomanPolicy},
    error::{ParseError, RuntimeError},
    interpreter::{
        converter::{arabic_to_roman, roman_to_arabic},
        lexer::Token,
    },
};

/// The notation an operand is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralSystem {
    /// Decimal digits, such as `7`.
    Arabic,
    /// Roman letters, such as `VII`.
    Roman,
}

impl NumeralSystem {
    /// Writes `value` in this numeral system.
    ///
    /// Arabic values are printed as they are, negative or not; Roman values
    /// must lie in `1..=max`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::OutOfRange`] for a Roman value outside the range.
    ///
    /// # Example
    /// ```
    /// use numerus::interpreter::numeral::NumeralSystem;
    ///
    /// assert_eq!(NumeralSystem::Arabic.render(-4, 10).unwrap(), "-4");
    /// assert_eq!(NumeralSystem::Roman.render(4, 10).unwrap(), "IV");
    /// assert!(NumeralSystem::Roman.render(-4, 10).is_err());
    /// ```
    pub fn render(self, value: i64, max: i64) -> Result<String, RuntimeError> {
        match self {
            Self::Arabic => Ok(value.to_string()),
            Self::Roman => arabic_to_roman(value, max),
        }
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arabic => write!(f, "Arabic"),
            Self::Roman => write!(f, "Roman"),
        }
    }
}

/// Decides which numeral system a token belongs to.
///
/// The Roman policy and ceiling come from the [`Config`] given at
/// construction. Under [`RomanPolicy::Strict`] a token is Roman only when it
/// is the canonical form of a value in range; under
/// [`RomanPolicy::Permissive`] any string of `IVXLCDM` is Roman and its range
/// is checked once it has been converted.
///
/// # Example
/// ```
/// use numerus::{config::Config, interpreter::numeral::Classifier};
///
/// let strict = Classifier::new(Config::basic());
/// assert!(strict.is_roman("IX"));
/// assert!(!strict.is_roman("VIIII"));
/// assert!(strict.is_arabic("10"));
/// assert!(!strict.is_arabic("11"));
///
/// let permissive = Classifier::new(Config::extended());
/// assert!(permissive.is_roman("VIIII"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classifier {
    config: Config,
}

impl Classifier {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Whether `token` is a Roman numeral under the configured policy.
    #[must_use]
    pub fn is_roman(&self, token: &str) -> bool {
        let Some(Token::Roman(text)) = Token::whole(token) else {
            return false;
        };

        match self.config.roman_policy() {
            RomanPolicy::Permissive => true,
            RomanPolicy::Strict => self.is_canonical(&text),
        }
    }

    /// Whether `token` is a decimal numeral within the configured range.
    ///
    /// Numeric tokens outside the range are not Arabic numerals at all.
    #[must_use]
    pub fn is_arabic(&self, token: &str) -> bool {
        matches!(Token::whole(token), Some(Token::Arabic(value)) if self.config.contains(value))
    }

    /// Returns the numeral system of `token`, if it has one.
    #[must_use]
    pub fn classify(&self, token: &str) -> Option<NumeralSystem> {
        let system = if self.is_arabic(token) {
            Some(NumeralSystem::Arabic)
        } else if self.is_roman(token) {
            Some(NumeralSystem::Roman)
        } else {
            None
        };
        debug!(token, ?system, "classified operand");
        system
    }

    /// Converts a token already classified as `system` to its value.
    ///
    /// # Errors
    /// Returns [`ParseError::Operand`] if the value falls outside the range,
    /// which only happens for permissively accepted Roman numerals such as
    /// `MMMM`.
    pub fn value_of(&self, token: &str, system: NumeralSystem) -> Result<i64, ParseError> {
        let value = match system {
            NumeralSystem::Arabic => match Token::whole(token) {
                Some(Token::Arabic(value)) => value,
                // Only reached when `system` was not produced by `classify`.
                _ => return Err(self.operand_error(token)),
            },
            NumeralSystem::Roman => roman_to_arabic(token)?,
        };

        if !self.config.contains(value) {
            return Err(self.operand_error(token));
        }
        Ok(value)
    }

    fn operand_error(&self, token: &str) -> ParseError {
        ParseError::Operand { token: token.to_string(),
                              max:   self.config.max_value(), }
    }

    fn is_canonical(&self, text: &str) -> bool {
        roman_to_arabic(text).ok()
                             .filter(|value| self.config.contains(*value))
                             .and_then(|value| {
                                 arabic_to_roman(value, self.config.max_value()).ok()
                             })
                             .is_some_and(|canonical| canonical == text)
    }
}
