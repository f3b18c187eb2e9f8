//! Error types for numeral validation and parsing.

use thiserror::Error;

/// Why an input was rejected, in the order the checks are applied.
///
/// The `Display` text is the message returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("Input must not be null or undefined")]
    MissingInput,
    #[error("Input must be a number")]
    NotANumber,
    #[error("Only integer values are allowed")]
    NotAnInteger,
    #[error("Number must be between 1 and 3999")]
    OutOfRange,
}

impl ValidationError {
    /// Stable machine-readable code, used for log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingInput => "missing_input",
            Self::NotANumber => "not_a_number",
            Self::NotAnInteger => "not_an_integer",
            Self::OutOfRange => "out_of_range",
        }
    }
}

/// Failure to read a string back as a canonical Roman numeral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNumeralError {
    #[error("numeral is empty")]
    Empty,
    #[error("invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("'{input}' is not a canonical numeral (expected '{canonical}')")]
    NonCanonical { input: String, canonical: String },
    #[error("numeral value exceeds 3999")]
    Overflow,
}
