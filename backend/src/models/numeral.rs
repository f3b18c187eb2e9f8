//! Roman numeral value type and the symbol table it is built from.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::services::converter;
use crate::services::error::ParseNumeralError;

/// Smallest value with a Roman numeral representation.
pub const MIN_VALUE: u16 = 1;

/// Largest value with a standard Roman numeral representation.
pub const MAX_VALUE: u16 = 3999;

/// Longest numeral produced over the valid domain (`MMMDCCCLXXXVIII`).
pub const MAX_NUMERAL_LEN: usize = 15;

/// Primary symbols and subtractive composites, strictly descending by value.
pub static SYMBOL_TABLE: [(u16, &str); 13] = [
    (1000, "M"),
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
    (1, "I"),
];

/// A canonical Roman numeral for a value in [`MIN_VALUE`, `MAX_VALUE`].
///
/// Values of this type are only produced by the converter, so the inner
/// string is always the unique canonical spelling of `value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RomanNumeral {
    value: u16,
    text: String,
}

impl RomanNumeral {
    pub(crate) fn new(value: u16, text: String) -> Self {
        Self { value, text }
    }

    /// The numeral as a string slice.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The integer value this numeral represents.
    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Serialize for RomanNumeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl FromStr for RomanNumeral {
    type Err = ParseNumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = converter::from_roman(s)?;
        Ok(converter::to_roman(value))
    }
}
