//! Request logging, request ids and per-request metrics.

use axum::{
    extract::{MatchedPath, Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

use super::state::AppState;
use crate::services::RequestLabels;

/// Header carrying the request id, echoed back on every response.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Route label for requests that matched no route, keeping the label set
/// bounded no matter which paths clients request.
pub const UNMATCHED_ROUTE: &str = "<unmatched>";

/// Log `METHOD URI -> STATUS`, count the request and time it.
///
/// A request id is taken from `x-request-id` when the client sent one,
/// otherwise a v4 UUID is generated.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let uri = req.uri().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());
    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut response = next.run(req).await;

    let status = response.status().as_u16();
    state.metrics.record_request(
        RequestLabels {
            method: method.clone(),
            route,
            status,
        },
        start.elapsed(),
    );
    info!(request_id = %request_id, "{} {} -> {}", method, uri, status);

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }
    response
}
