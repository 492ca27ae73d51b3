//! Numeric input checks
//!
//! Values arrive either as numbers or as text typed by a user. Text is
//! matched against the literal grammar `digits ('.' digits)? ([eE] [+-]? digits)?`
//! by a byte scanner before it is handed to the float parser.

use crate::{ModfysError, Result};

/// A value offered to the validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput<'a> {
    /// Already a number
    Number(f64),
    /// Text that may hold a numeric literal
    Text(&'a str),
}

impl core::fmt::Display for NumericInput<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NumericInput::Number(value) => write!(f, "{value}"),
            NumericInput::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<f64> for NumericInput<'_> {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<f32> for NumericInput<'_> {
    fn from(value: f32) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<i32> for NumericInput<'_> {
    fn from(value: i32) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<u32> for NumericInput<'_> {
    fn from(value: u32) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<i64> for NumericInput<'_> {
    fn from(value: i64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<u64> for NumericInput<'_> {
    fn from(value: u64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(value: &'a str) -> Self {
        NumericInput::Text(value)
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(value: &'a String) -> Self {
        NumericInput::Text(value.as_str())
    }
}

/// Check whether text is a numeric literal
///
/// Accepts one or more digits, an optional decimal point that must be
/// followed by at least one digit, and an optional exponent. No sign,
/// whitespace or bare decimal point is allowed.
pub const fn is_numeric_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let len = bytes.len();

    let mut pos = scan_digits(bytes, 0);
    if pos == 0 {
        return false;
    }

    if pos < len && bytes[pos] == b'.' {
        let end = scan_digits(bytes, pos + 1);
        if end == pos + 1 {
            return false;
        }
        pos = end;
    }

    if pos < len && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        pos += 1;
        if pos < len && (bytes[pos] == b'+' || bytes[pos] == b'-') {
            pos += 1;
        }
        let end = scan_digits(bytes, pos);
        if end == pos {
            return false;
        }
        pos = end;
    }

    pos == len
}

/// Advance past a run of ASCII digits, returning the first non-digit position
const fn scan_digits(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

/// Validate and convert a value to `f64`
///
/// Numbers must be finite. Text must be a numeric literal; a literal whose
/// magnitude does not fit in `f64` is reported as [`ModfysError::NumericOverflow`].
pub fn check_number<'a>(value: impl Into<NumericInput<'a>>) -> Result<f64> {
    let value = value.into();
    match value {
        NumericInput::Number(number) if number.is_finite() => Ok(number),
        NumericInput::Text(text) if is_numeric_literal(text) => {
            let number = text.parse::<f64>().map_err(|_| ModfysError::NotANumber)?;
            if number.is_finite() {
                Ok(number)
            } else {
                log::warn!("Numeric literal {value} is too large for f64");
                Err(ModfysError::NumericOverflow)
            }
        }
        _ => {
            log::warn!("Tried to enter something else than a number: {value}");
            Err(ModfysError::NotANumber)
        }
    }
}

/// Check whether a value is numeric
///
/// Same acceptance as [`check_number`], so a literal that overflows `f64`
/// such as `"1e999"` is not numeric even though it matches the grammar.
pub fn is_numeric<'a>(value: impl Into<NumericInput<'a>>) -> bool {
    check_number(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_literal() {
        // Valid literals
        assert!(is_numeric_literal("12345"));
        assert!(is_numeric_literal("5"));
        assert!(is_numeric_literal("12345.6789"));
        assert!(is_numeric_literal("0.123456789"));
        assert!(is_numeric_literal("3e8"));
        assert!(is_numeric_literal("3e+8"));
        assert!(is_numeric_literal("1.5E-10"));

        // Invalid literals
        assert!(!is_numeric_literal(""));
        assert!(!is_numeric_literal(".123456789"));
        assert!(!is_numeric_literal("12345..6789"));
        assert!(!is_numeric_literal("12345.e.6789"));
        assert!(!is_numeric_literal("5."));
        assert!(!is_numeric_literal("3e"));
        assert!(!is_numeric_literal("3e+"));
        assert!(!is_numeric_literal("-5"));
        assert!(!is_numeric_literal(" 5"));
        assert!(!is_numeric_literal("string"));
    }

    #[test]
    fn test_is_numeric() {
        // Numbers
        assert!(is_numeric(12345));
        assert!(is_numeric(12345.6789));
        assert!(is_numeric(12345.6e-10));
        assert!(is_numeric(-2.5));
        assert!(!is_numeric(f64::NAN));
        assert!(!is_numeric(f64::INFINITY));

        // Text
        assert!(is_numeric("12345.6789"));
        assert!(is_numeric("0.123456789"));
        assert!(!is_numeric(".123456789"));
        assert!(is_numeric_literal("1e999"));
        assert!(!is_numeric("1e999"));
        assert!(!is_numeric("12345..6789"));
        assert!(!is_numeric("12345.e.6789"));
        assert!(!is_numeric("string"));
    }

    #[test]
    fn test_check_number() {
        assert_eq!(check_number("12345.6789"), Ok(12345.6789));
        assert_eq!(check_number("3e+8"), Ok(3e8));
        assert_eq!(check_number(42u32), Ok(42.0));
        assert_eq!(check_number("string"), Err(ModfysError::NotANumber));
        assert_eq!(check_number(f64::NAN), Err(ModfysError::NotANumber));
        assert_eq!(check_number("1e999"), Err(ModfysError::NumericOverflow));

        let owned = String::from("270000000");
        assert_eq!(check_number(&owned), Ok(2.7e8));
    }
}
