use tracing::trace;

use crate::error::{ParseError, RuntimeError};

/// Roman symbols in descending order of value, subtractive pairs included.
///
/// Greedy subtraction over this table yields the canonical form of every
/// value from 1 to 3999.
pub const ROMAN_TABLE: [(i64, &str); 13] = [(1000, "M"),
                                            (900, "CM"),
                                            (500, "D"),
                                            (400, "CD"),
                                            (100, "C"),
                                            (90, "XC"),
                                            (50, "L"),
                                            (40, "XL"),
                                            (10, "X"),
                                            (9, "IX"),
                                            (5, "V"),
                                            (4, "IV"),
                                            (1, "I")];

/// Returns the value of a single Roman letter.
const fn letter_value(letter: char) -> Option<i64> {
    match letter {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Converts Roman text to its integer value.
///
/// The text is scanned once from left to right. When a letter is worth more
/// than the one before it, the earlier addition is turned into a subtraction
/// by adding `value - 2 * previous`.
///
/// Any string of Roman letters gets a value, canonical or not: `IIII` is 4 and
/// `IIV` is 5. Callers that only want canonical forms compare the text with
/// [`arabic_to_roman`] of the result.
///
/// # Errors
/// Returns [`ParseError::InvalidNumeral`] if the text is empty or contains a
/// character outside `IVXLCDM`.
///
/// # Example
/// ```
/// use numerus::interpreter::converter::roman_to_arabic;
///
/// assert_eq!(roman_to_arabic("MCMXCIV").unwrap(), 1994);
/// assert_eq!(roman_to_arabic("IIV").unwrap(), 5);
/// assert!(roman_to_arabic("XIZ").is_err());
/// ```
pub fn roman_to_arabic(text: &str) -> Result<i64, ParseError> {
    if text.is_empty() {
        return Err(ParseError::InvalidNumeral { text: text.to_string() });
    }

    let mut total = 0;
    let mut previous = 0;

    for letter in text.chars() {
        let Some(value) = letter_value(letter) else {
            return Err(ParseError::InvalidNumeral { text: text.to_string() });
        };

        if value > previous {
            total += value - 2 * previous;
        } else {
            total += value;
        }
        previous = value;
    }

    trace!(text, total, "converted Roman numeral");
    Ok(total)
}

/// Converts an integer to its canonical Roman form.
///
/// # Errors
/// Returns [`RuntimeError::OutOfRange`] if `value` is not in `1..=max`.
///
/// # Example
/// ```
/// use numerus::interpreter::converter::arabic_to_roman;
///
/// assert_eq!(arabic_to_roman(18, 3999).unwrap(), "XVIII");
/// assert_eq!(arabic_to_roman(10, 10).unwrap(), "X");
/// assert!(arabic_to_roman(18, 10).is_err());
/// assert!(arabic_to_roman(0, 10).is_err());
/// ```
pub fn arabic_to_roman(value: i64, max: i64) -> Result<String, RuntimeError> {
    if value <= 0 || value > max {
        return Err(RuntimeError::OutOfRange { value, max });
    }

    let mut remainder = value;
    let mut roman = String::new();

    for (step, symbol) in ROMAN_TABLE {
        while remainder >= step {
            roman.push_str(symbol);
            remainder -= step;
        }
    }

    trace!(value, roman = %roman, "rendered Roman numeral");
    Ok(roman)
}
