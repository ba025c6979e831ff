//! HTTP request handlers for the hawaii-climate API.
//!
//! This module contains all the endpoint handlers for the web server and the
//! router that wires them together.

pub mod heartbeat;
pub mod index;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use heartbeat::heartbeat_handler;
pub use index::index_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use temperature::{range_stats_handler, start_stats_handler};
pub use tobs::tobs_handler;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::error::ClimateError;
use crate::logging::{create_http_trace_layer, log_request_error};
use crate::state::AppState;

/// Build the application router with every endpoint and the shared layers
pub fn build_router(state: Arc<AppState>) -> Router {
    heartbeat::mark_server_start();

    Router::new()
        .route("/", get(index_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(start_stats_handler))
        .route("/api/v1.0/:start/:end", get(range_stats_handler))
        .layer(CorsLayer::permissive())
        .layer(create_http_trace_layer())
        .with_state(state)
}

/// Turn a failed request into a generic JSON error.
///
/// The full error is logged with the request id; the client only sees the
/// status text so store internals never leak.
pub(crate) fn error_response(
    error: ClimateError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    let status = error.status_code();
    let message = status.canonical_reason().unwrap_or("Internal Server Error");

    (
        status,
        Json(serde_json::json!({
            "error": message,
            "request_id": request_id
        })),
    )
        .into_response()
}
