//! Service layer: validation, conversion and metrics.
//!
//! The HTTP handlers call into [`converter::convert`] and report the outcome
//! to [`metrics::Metrics`]; nothing here depends on the transport.

pub mod converter;
pub mod error;
pub mod metrics;
pub mod validator;

pub use converter::{convert, from_roman, to_roman};
pub use error::{ParseNumeralError, ValidationError};
pub use metrics::{Metrics, RequestLabels};
pub use validator::validate;
