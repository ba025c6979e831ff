//! Precipitation endpoint handler.
//!
//! Returns every precipitation reading of the last 12 months of the dataset.

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
use crate::models::PrecipitationReading;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// One entry of the precipitation response
#[derive(Debug, Serialize)]
pub struct PrecipitationEntry {
    #[serde(rename = "Date")]
    pub date: String,
    pub precipitation: Option<f64>,
}

impl From<PrecipitationReading> for PrecipitationEntry {
    fn from(reading: PrecipitationReading) -> Self {
        Self {
            date: reading.date,
            precipitation: reading.prcp,
        }
    }
}

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        cutoff = %state.cutoff_date,
        "Processing precipitation request"
    );

    let readings = match state.store.list_precipitation_since(&state.cutoff_date).await {
        Ok(readings) => readings,
        Err(error) => {
            let params = format!("cutoff={}", state.cutoff_date);
            return error_response(error, ENDPOINT, &request_id, Some(&params));
        }
    };

    let entries: Vec<PrecipitationEntry> = readings.into_iter().map(Into::into).collect();

    info!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        duration_us = start_time.elapsed().as_micros() as u64,
        rows = entries.len(),
        "Precipitation request successful"
    );

    Json(entries).into_response()
}
