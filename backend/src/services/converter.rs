//! Greedy Roman numeral conversion and its inverse.

use tracing::{debug, trace};

use super::error::{ParseNumeralError, ValidationError};
use super::validator::validate;
use crate::models::{NumeralInput, RomanNumeral, MAX_NUMERAL_LEN, SYMBOL_TABLE};

/// Validate `input` and convert it.
///
/// This is the only entry point the transport layer needs: any rejection is
/// returned as a [`ValidationError`] before conversion is attempted.
pub fn convert(input: &NumeralInput) -> Result<RomanNumeral, ValidationError> {
    let n = validate(input)?;
    let numeral = to_roman(n);
    trace!(value = n, numeral = %numeral, "converted");
    Ok(numeral)
}

/// Convert an already validated value in `1..=3999`.
pub fn to_roman(n: u16) -> RomanNumeral {
    debug_assert!((1..=3999).contains(&n), "to_roman called with unvalidated {n}");

    let mut remaining = n;
    let mut text = String::with_capacity(MAX_NUMERAL_LEN);
    for &(value, fragment) in SYMBOL_TABLE.iter() {
        while remaining >= value {
            text.push_str(fragment);
            remaining -= value;
        }
    }
    RomanNumeral::new(n, text)
}

/// Parse a canonical numeral back into its value.
///
/// Only the spelling `to_roman` would produce is accepted; forms such as
/// `IIII` or `IC` are rejected as non-canonical.
pub fn from_roman(s: &str) -> Result<u16, ParseNumeralError> {
    if s.is_empty() {
        return Err(ParseNumeralError::Empty);
    }

    let mut position = 0;
    let mut value: u16 = 0;
    while position < s.len() {
        let rest = &s[position..];
        let Some(&(fragment_value, fragment)) = SYMBOL_TABLE
            .iter()
            .find(|(_, fragment)| rest.starts_with(fragment))
        else {
            let ch = rest.chars().next().unwrap_or_default();
            return Err(ParseNumeralError::InvalidCharacter { ch, position });
        };
        value += fragment_value;
        if value > 3999 {
            return Err(ParseNumeralError::Overflow);
        }
        position += fragment.len();
    }

    let canonical = to_roman(value);
    if canonical.as_str() != s {
        debug!(input = s, canonical = %canonical, "rejecting non-canonical numeral");
        return Err(ParseNumeralError::NonCanonical {
            input: s.to_string(),
            canonical: canonical.into_string(),
        });
    }
    Ok(value)
}
