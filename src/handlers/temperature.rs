//! Temperature statistics endpoint handlers.
//!
//! `/api/v1.0/:start` and `/api/v1.0/:start/:end` report the minimum, maximum
//! and mean temperature observation over a date window. The path segments are
//! not validated: they are compared as text against the stored dates, so a
//! malformed date simply matches nothing. An empty window answers 200 with
//! `null` statistics.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::logging::generate_request_id;
use crate::models::TemperatureStats;
use crate::state::AppState;

const START_ENDPOINT: &str = "/api/v1.0/:start";
const RANGE_ENDPOINT: &str = "/api/v1.0/:start/:end";

/// Shape stats as three single-key objects
pub fn stats_body(stats: &TemperatureStats) -> Value {
    json!([
        { "Min Temperature": stats.min },
        { "Max Temperature": stats.max },
        { "Avg Temperature": stats.avg }
    ])
}

/// Handle GET /api/v1.0/:start requests
pub async fn start_stats_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    stats_response(&state, START_ENDPOINT, &start, None).await
}

/// Handle GET /api/v1.0/:start/:end requests
pub async fn range_stats_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    stats_response(&state, RANGE_ENDPOINT, &start, Some(&end)).await
}

async fn stats_response(
    state: &AppState,
    endpoint: &str,
    start: &str,
    end: Option<&str>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = endpoint,
        request_id = %request_id,
        start = start,
        end = end.unwrap_or("none"),
        "Processing temperature stats request"
    );

    match state.store.temperature_stats(start, end).await {
        Ok(stats) => {
            info!(
                endpoint = endpoint,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                observation_count = stats.count,
                empty_window = stats.is_empty(),
                "Temperature stats request successful"
            );

            Json(stats_body(&stats)).into_response()
        }
        Err(error) => {
            let params = format!("start={}, end={}", start, end.unwrap_or("none"));
            error_response(error, endpoint, &request_id, Some(&params))
        }
    }
}
