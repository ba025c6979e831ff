//! Row types for the two tables of the climate database.
//!
//! The schema is declared here explicitly instead of being discovered at
//! runtime. Field names match the column names so `sqlx::FromRow` can map
//! query results directly.

use serde::Serialize;
use sqlx::FromRow;

/// A full row of the `station` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Station {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// `(date, prcp)` projection of the `measurement` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PrecipitationReading {
    pub date: String,
    /// Absent readings stay `None`; they are never defaulted or dropped.
    pub prcp: Option<f64>,
}

/// `(date, tobs)` projection of the `measurement` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TemperatureReading {
    pub date: String,
    pub tobs: f64,
}

/// Aggregate of `tobs` over a date window.
///
/// All three statistics are `None` when no rows fall inside the window.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
    pub count: i64,
}

impl TemperatureStats {
    /// True when the window matched no observations
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Row counts and date coverage of the whole database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DatasetSummary {
    pub station_count: i64,
    pub measurement_count: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

/// Number of measurement rows recorded by one station.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct StationActivity {
    pub station: String,
    pub observation_count: i64,
}
