//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse},
    Json,
};
use tracing::{info, warn};

use super::dto::{ConversionResponse, HealthResponse, RomanQuery};
use super::error::AppError;
use super::state::AppState;
use crate::models::NumeralInput;
use crate::services::{converter, metrics::PROMETHEUS_CONTENT_TYPE, ValidationError};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const INDEX_HTML: &str = include_str!("../../static/index.html");

// =============================================================================
// Liveness
// =============================================================================

/// GET /ping
pub async fn ping() -> &'static str {
    info!("Received /ping");
    "pong"
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let uptime = chrono::Utc::now() - state.metrics.start_time();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime.num_seconds(),
    }))
}

// =============================================================================
// Conversion
// =============================================================================

/// GET /romannumeral?query={n}
///
/// Convert `query` to a Roman numeral. Every rejection is a 400 whose body
/// is the validation message. When `query` is repeated the first value is
/// used.
#[tracing::instrument(skip_all, fields(query = tracing::field::Empty))]
pub async fn convert_numeral(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> HandlerResult<ConversionResponse> {
    let params = match pairs {
        Ok(Query(pairs)) => RomanQuery::from_pairs(pairs),
        Err(rejection) => {
            state.metrics.record_failure();
            warn!(%rejection, "Undecodable query string");
            return Err(ValidationError::NotANumber.into());
        }
    };
    tracing::Span::current().record("query", params.query.as_deref().unwrap_or_default());

    let input = NumeralInput::from_query(params.query.as_deref());

    match converter::convert(&input) {
        Ok(numeral) => {
            state.metrics.record_conversion(numeral.value());
            info!("Converted {} to {}", numeral.value(), numeral);
            Ok(Json(ConversionResponse {
                input: params.query.unwrap_or_default(),
                output: numeral.into_string(),
            }))
        }
        Err(err) => {
            state.metrics.record_failure();
            warn!(reason = err.code(), "Invalid query parameter: {}", err);
            Err(err.into())
        }
    }
}

// =============================================================================
// Metrics & client
// =============================================================================

/// GET /metrics
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        state.metrics.render(),
    )
}

/// GET /
///
/// Serve the single-page converter client.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
