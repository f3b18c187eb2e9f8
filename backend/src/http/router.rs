//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, tracing, request
//! metrics), and creates the axum router ready for serving.

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::middleware::{track_requests, REQUEST_ID_HEADER};
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.server.cors_allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers([REQUEST_ID_HEADER.clone()])
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(handlers::index))
        .route("/ping", get(handlers::ping))
        .route("/health", get(handlers::health_check))
        .route("/romannumeral", get(handlers::convert_numeral))
        .route("/metrics", get(handlers::metrics))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
