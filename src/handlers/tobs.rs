//! Temperature observations endpoint handler.
//!
//! Returns the last 12 months of `tobs` readings for the fixed most active
//! station.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::logging::generate_request_id;
use crate::models::TemperatureReading;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/tobs";

/// One entry of the tobs response
#[derive(Debug, Serialize)]
pub struct TobsEntry {
    #[serde(rename = "Date")]
    pub date: String,
    pub temperature: f64,
}

impl From<TemperatureReading> for TobsEntry {
    fn from(reading: TemperatureReading) -> Self {
        Self {
            date: reading.date,
            temperature: reading.tobs,
        }
    }
}

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        station = state.tobs_station,
        cutoff = %state.cutoff_date,
        "Processing tobs request"
    );

    let readings = match state
        .store
        .list_temperatures_for_station(state.tobs_station, &state.cutoff_date)
        .await
    {
        Ok(readings) => readings,
        Err(error) => {
            let params = format!(
                "station={}, cutoff={}",
                state.tobs_station, state.cutoff_date
            );
            return error_response(error, ENDPOINT, &request_id, Some(&params));
        }
    };

    let entries: Vec<TobsEntry> = readings.into_iter().map(Into::into).collect();

    info!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        duration_us = start_time.elapsed().as_micros() as u64,
        rows = entries.len(),
        "Tobs request successful"
    );

    Json(entries).into_response()
}
