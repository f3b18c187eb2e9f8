//! Domain types: the raw conversion input and the numeral it produces.

pub mod input;
pub mod numeral;

pub use input::NumeralInput;
pub use numeral::{RomanNumeral, MAX_NUMERAL_LEN, MAX_VALUE, MIN_VALUE, SYMBOL_TABLE};
