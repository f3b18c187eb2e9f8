//! Typed client for the conversion endpoint.
//!
//! Mirrors what the browser client does: pre-check the input locally,
//! call `GET /romannumeral`, and surface the server's message verbatim on
//! rejection.

use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::http::dto::ConversionResponse;
use crate::models::{MAX_VALUE, MIN_VALUE};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a client-side conversion did not yield a numeral.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected locally, no request was sent.
    #[error("Please enter a number between 1 and 3999.")]
    InvalidInput,
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request could not be completed or decoded.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client bound to one server.
#[derive(Debug, Clone)]
pub struct RomanClient {
    base_url: String,
    http: reqwest::Client,
}

impl RomanClient {
    /// Create a client for `base_url`, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(base_url, http))
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Convert user-typed `input`, returning the numeral.
    pub async fn convert(&self, input: &str) -> Result<String, ClientError> {
        precheck(input)?;

        let url = format!("{}/romannumeral", self.base_url);
        debug!(%url, input, "requesting conversion");
        let response = self.http.get(&url).query(&[("query", input)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = if text.is_empty() {
                "Failed to fetch result".to_string()
            } else {
                text
            };
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: ConversionResponse = response.json().await?;
        Ok(body.output)
    }

    /// `GET /ping`; true when the server answers `pong`.
    pub async fn ping(&self) -> Result<bool, ClientError> {
        let response = self
            .http
            .get(format!("{}/ping", self.base_url))
            .send()
            .await?;
        Ok(response.status().is_success() && response.text().await? == "pong")
    }
}

/// Local range check applied before any request is made.
///
/// Reads the leading integer the way a browser `parseInt` does, so `"12abc"`
/// passes the check and is left for the server to judge.
pub fn precheck(input: &str) -> Result<i64, ClientError> {
    leading_integer(input)
        .filter(|n| (i64::from(MIN_VALUE)..=i64::from(MAX_VALUE)).contains(n))
        .ok_or(ClientError::InvalidInput)
}

fn leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
