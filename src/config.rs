use crate::error::ConfigError;

/// Ceiling of the basic variant, matching the classic `I` to `X` calculator.
pub const BASIC_MAX_VALUE: i64 = 10;
/// Largest value standard Roman notation can express without overlines.
pub const EXTENDED_MAX_VALUE: i64 = 3999;

/// How strictly Roman operands are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RomanPolicy {
    /// Only canonical forms are Roman: `IV` is, `IIII` is not.
    #[default]
    Strict,
    /// Any string of `IVXLCDM` is Roman; its value comes from the
    /// subtractive scan, so `IIII` is 4 and `IIV` is 5.
    Permissive,
}

/// Numeral range and Roman policy of an evaluator.
///
/// A `Config` is chosen once and never changes afterwards; every evaluation
/// reads it but none writes to it.
///
/// # Example
/// ```
/// use numerus::config::{Config, RomanPolicy};
///
/// let config = Config::new(100, RomanPolicy::Permissive).unwrap();
/// assert_eq!(config.max_value(), 100);
///
/// assert!(Config::new(0, RomanPolicy::Strict).is_err());
/// assert!(Config::new(4000, RomanPolicy::Strict).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_value:    i64,
    roman_policy: RomanPolicy,
}

impl Config {
    /// Creates a configuration with the given ceiling and Roman policy.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidCeiling`] unless `max_value` lies in
    /// `1..=3999`.
    pub const fn new(max_value: i64, roman_policy: RomanPolicy) -> Result<Self, ConfigError> {
        if max_value < 1 || max_value > EXTENDED_MAX_VALUE {
            return Err(ConfigError::InvalidCeiling { value: max_value });
        }
        Ok(Self { max_value,
                  roman_policy })
    }

    /// Numerals from 1 to 10, canonical Roman forms only.
    #[must_use]
    pub const fn basic() -> Self {
        Self { max_value:    BASIC_MAX_VALUE,
               roman_policy: RomanPolicy::Strict, }
    }

    /// Numerals from 1 to 3999, any string of Roman letters accepted.
    #[must_use]
    pub const fn extended() -> Self {
        Self { max_value:    EXTENDED_MAX_VALUE,
               roman_policy: RomanPolicy::Permissive, }
    }

    #[must_use]
    pub const fn max_value(&self) -> i64 {
        self.max_value
    }

    #[must_use]
    pub const fn roman_policy(&self) -> RomanPolicy {
        self.roman_policy
    }

    /// Whether `value` is a numeral this configuration accepts.
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        value >= 1 && value <= self.max_value
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::basic()
    }
}
