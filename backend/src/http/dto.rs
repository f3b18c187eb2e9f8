//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /romannumeral`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RomanQuery {
    /// Number to convert, as typed by the user
    #[serde(default)]
    pub query: Option<String>,
}

impl RomanQuery {
    /// Pick the first `query` value out of decoded query-string pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let query = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "query").then_some(value));
        Self { query }
    }
}

/// Successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    /// The query string exactly as received
    pub input: String,
    /// Canonical Roman numeral
    pub output: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
    /// Seconds since the metrics registry was created
    pub uptime_seconds: i64,
}
