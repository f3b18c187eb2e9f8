//! # Roman Numeral Backend
//!
//! Converts integers in `1..=3999` into canonical Roman numerals and serves
//! the conversion over HTTP.
//!
//! ## Architecture
//!
//! - [`models`]: the raw input type, the numeral type and the symbol table
//! - [`services`]: validation, greedy conversion and its inverse, metrics
//! - [`config`]: TOML + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`client`]: typed HTTP client for the conversion endpoint
//!
//! ## Example
//!
//! ```
//! use roman_numeral::models::NumeralInput;
//! use roman_numeral::services::{convert, ValidationError};
//!
//! let numeral = convert(&NumeralInput::from_query(Some("1994"))).unwrap();
//! assert_eq!(numeral.as_str(), "MCMXCIV");
//!
//! let err = convert(&NumeralInput::from_query(Some("4000"))).unwrap_err();
//! assert_eq!(err, ValidationError::OutOfRange);
//! ```

pub mod config;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(feature = "http-server")]
pub mod logging;

#[cfg(feature = "client")]
pub mod client;

pub use models::{NumeralInput, RomanNumeral};
pub use services::{convert, ValidationError};
