//! Value conversion and binding.
//!
//! Numeric parsing is deliberately lenient, in the manner of `atoi`/`atof`:
//! leading ASCII whitespace and one sign are accepted, scanning stops at the
//! first invalid character, and malformed or empty input yields zero. No
//! diagnostic is ever produced for a bad literal.

use crate::command::ArgTarget;
use crate::token::Cursor;

impl<const MAX: usize> ArgTarget<'_, MAX> {
    /// Consumes one value token from the cursor, converts it according to
    /// the target variant and stores the result. Numeric targets take a
    /// bare token, string targets a bare-or-quoted one. An empty token
    /// (value missing at end of line) binds the type's zero value.
    pub(crate) fn bind(&self, cursor: &mut Cursor<'_>) {
        let limit = MAX.saturating_sub(1);
        match self {
            ArgTarget::Int(cell) => cell.set(parse_int_lenient(cursor.bare_token(limit))),
            ArgTarget::Float(cell) => cell.set(parse_float_lenient(cursor.bare_token(limit))),
            ArgTarget::Str(buf) => buf.set(cursor.value_token(limit)),
        }
    }
}

/// `atoi`-style scan: optional whitespace, optional sign, digits up to the
/// first non-digit. Overflow wraps.
pub(crate) fn parse_int_lenient(token: &str) -> i32 {
    let bytes = token.trim_start_matches(|c: char| c.is_ascii_whitespace()).as_bytes();
    let mut i = 0;
    let mut negative = false;
    if let Some(&(b @ (b'+' | b'-'))) = bytes.first() {
        negative = b == b'-';
        i = 1;
    }
    let mut value: i32 = 0;
    while let Some(b) = bytes.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add((b - b'0') as i32);
        i += 1;
    }
    if negative { value.wrapping_neg() } else { value }
}

/// `atof`-style scan: the longest prefix matching
/// `[+-] digits [. digits] [eE [+-] digits]` is parsed; anything after it
/// is ignored. No valid digits at all yields 0.0.
pub(crate) fn parse_float_lenient(token: &str) -> f32 {
    let trimmed = token.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let bytes = trimmed.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(&(b'+' | b'-'))) {
        i = 1;
    }
    let mut has_digits = false;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
        has_digits = true;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
            has_digits = true;
        }
    }
    if has_digits && matches!(bytes.get(i), Some(&(b'e' | b'E'))) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(&(b'+' | b'-'))) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        // A bare 'e' with no exponent digits is not part of the literal.
        if j > exp_start {
            i = j;
        }
    }
    if !has_digits {
        return 0.0;
    }
    trimmed[..i].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod value_tests {
    use super::*;

    #[test]
    fn test_int_plain_and_signed() {
        assert_eq!(parse_int_lenient("42"), 42);
        assert_eq!(parse_int_lenient("-17"), -17);
        assert_eq!(parse_int_lenient("+8"), 8);
    }

    #[test]
    fn test_int_stops_at_first_non_digit() {
        assert_eq!(parse_int_lenient("123abc"), 123);
        assert_eq!(parse_int_lenient("12.9"), 12);
    }

    #[test]
    fn test_int_malformed_is_zero() {
        assert_eq!(parse_int_lenient(""), 0);
        assert_eq!(parse_int_lenient("notanumber"), 0);
        assert_eq!(parse_int_lenient("-"), 0);
    }

    #[test]
    fn test_int_leading_whitespace_tolerated() {
        assert_eq!(parse_int_lenient("  7"), 7);
    }

    #[test]
    fn test_float_decimal_and_exponent() {
        assert!((parse_float_lenient("3.14") - 3.14).abs() < 1e-6);
        assert!((parse_float_lenient("-0.5") + 0.5).abs() < 1e-6);
        assert!((parse_float_lenient("2e3") - 2000.0).abs() < 1e-3);
        assert!((parse_float_lenient("1.5E-2") - 0.015).abs() < 1e-6);
    }

    #[test]
    fn test_float_stops_at_first_invalid() {
        assert!((parse_float_lenient("3.14stray") - 3.14).abs() < 1e-6);
        // 'e' without exponent digits does not belong to the literal.
        assert!((parse_float_lenient("2e") - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_float_malformed_is_zero() {
        assert_eq!(parse_float_lenient(""), 0.0);
        assert_eq!(parse_float_lenient("x2"), 0.0);
        assert_eq!(parse_float_lenient("."), 0.0);
    }
}
