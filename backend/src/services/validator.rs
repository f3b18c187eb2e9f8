//! Input validation for numeral conversion.
//!
//! Checks run in a fixed order and stop at the first failure:
//! presence, numeric type, integrality, range. A fractional negative number
//! is therefore `NotAnInteger`, never `OutOfRange`.

use super::error::ValidationError;
use crate::models::{NumeralInput, MAX_VALUE, MIN_VALUE};

/// Classify `input`, returning the integer unchanged when it is in range.
pub fn validate(input: &NumeralInput) -> Result<u16, ValidationError> {
    let n = match input {
        NumeralInput::Absent => return Err(ValidationError::MissingInput),
        NumeralInput::Text(_) => return Err(ValidationError::NotANumber),
        NumeralInput::Float(f) => integral_value(*f)?,
        NumeralInput::Integer(i) => *i,
    };
    check_range(n)
}

fn integral_value(f: f64) -> Result<i64, ValidationError> {
    if !f.is_finite() || f.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger);
    }
    // Saturating cast; anything this large is out of range anyway.
    Ok(f as i64)
}

fn check_range(n: i64) -> Result<u16, ValidationError> {
    u16::try_from(n)
        .ok()
        .filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
        .ok_or(ValidationError::OutOfRange)
}
