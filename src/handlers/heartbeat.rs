//! Heartbeat endpoint handler.
//!
//! Returns server status information, including uptime and a summary of the
//! database being served.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

use super::error_response;
use crate::logging::generate_request_id;
use crate::models::DatasetSummary;
use crate::state::AppState;

/// Server ID, unique per process
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Pin the start time so uptime counts from router construction, not from
/// the first heartbeat request.
pub fn mark_server_start() {
    once_cell::sync::Lazy::force(&START_TIME);
}

/// Heartbeat response structure
#[derive(Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Dataset information
    pub dataset: DatasetInfo,
    /// Server status
    pub status: String,
}

/// Dataset information structure
#[derive(Serialize)]
pub struct DatasetInfo {
    /// Database file path
    pub database_path: String,
    /// Configured pool size
    pub max_connections: u32,
    pub station_count: i64,
    pub measurement_count: i64,
    /// Earliest measurement date
    pub first_date: Option<String>,
    /// Latest measurement date
    pub last_date: Option<String>,
    /// Anchor of the trailing-year endpoints
    pub cutoff_date: String,
}

impl DatasetInfo {
    fn new(state: &AppState, summary: DatasetSummary) -> Self {
        Self {
            database_path: state.config.database.path.display().to_string(),
            max_connections: state.config.database.max_connections,
            station_count: summary.station_count,
            measurement_count: summary.measurement_count,
            first_date: summary.first_date,
            last_date: summary.last_date,
            cutoff_date: state.cutoff_date.clone(),
        }
    }
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();

    let summary = match state.store.dataset_summary().await {
        Ok(summary) => summary,
        Err(error) => return error_response(error, "/heartbeat", &request_id, None),
    };

    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    let response = HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        dataset: DatasetInfo::new(&state, summary),
        status: "healthy".to_string(),
    };

    Json(response).into_response()
}
