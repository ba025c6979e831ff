//! Stations endpoint handler.

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
use crate::models::Station;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/stations";

/// One station as exposed by the API
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationEntry {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl From<Station> for StationEntry {
    fn from(station: Station) -> Self {
        Self {
            station: station.station,
            name: station.name,
            latitude: station.latitude,
            longitude: station.longitude,
            elevation: station.elevation,
        }
    }
}

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing stations request"
    );

    match state.store.list_stations().await {
        Ok(stations) => {
            let entries: Vec<StationEntry> = stations.into_iter().map(Into::into).collect();

            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                station_count = entries.len(),
                "Stations request successful"
            );

            Json(entries).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}
