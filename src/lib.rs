//! # hawaii-climate
//!
//! A small read-only JSON API over a historical Hawaii weather dataset.
//!
//! The dataset is a SQLite file with two tables: `measurement` (date-stamped
//! precipitation and temperature readings per station) and `station` (station
//! names and coordinates). The server never writes to it.
//!
//! ## Architecture
//!
//! - **Data Layer** ([`store`], [`models`]): a pooled read-only connection and
//!   the filtered/aggregated queries behind each endpoint
//! - **API Layer** ([`handlers`]): axum handlers shaping query results as JSON
//! - **Bootstrap** ([`config`], [`logging`], [`state`]): layered configuration,
//!   structured logging and the shared application state

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{ClimateError, Result};
pub use handlers::build_router;
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_database_stats, log_error,
    log_operation_end, log_operation_start, log_request_error,
};
pub use models::{
    DatasetSummary, PrecipitationReading, Station, StationActivity, TemperatureReading,
    TemperatureStats,
};
pub use state::AppState;
pub use store::{ClimateStore, MOST_ACTIVE_STATION, REFERENCE_DATE};
