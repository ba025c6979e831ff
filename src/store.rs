//! Read-only access to the climate database.
//!
//! This module opens the SQLite file once at startup and exposes the handful of
//! filtered and aggregated queries the HTTP layer needs. Every operation takes
//! one pooled connection for its duration; the connection goes back to the pool
//! when it is dropped, whether the query succeeded or not.
//!
//! Dates are stored as `YYYY-MM-DD` text and all date filters are plain string
//! comparisons against the caller's input. User supplied dates are never parsed.

use chrono::{Months, NaiveDate};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ClimateError, Result};
use crate::models::{
    DatasetSummary, PrecipitationReading, Station, StationActivity, TemperatureReading,
    TemperatureStats,
};

/// Last date of the dataset; anchors every "last 12 months" window.
pub const REFERENCE_DATE: &str = "2017-08-23";

/// Station served by `/api/v1.0/tobs`.
///
/// This is a fixed identifier, not a value computed from the data. See
/// [`ClimateStore::station_activity`] for the actual ranking.
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

const DATE_FORMAT: &str = "%Y-%m-%d";

const PRECIPITATION_SINCE: &str = "SELECT date, prcp FROM measurement WHERE date >= ?";

const ALL_STATIONS: &str =
    "SELECT station, name, latitude, longitude, elevation FROM station";

const STATION_TEMPERATURES_SINCE: &str =
    "SELECT date, tobs FROM measurement WHERE station = ? AND date >= ?";

const STATS_FROM: &str = "SELECT CAST(MIN(tobs) AS REAL) AS min, CAST(MAX(tobs) AS REAL) AS max, \
     AVG(tobs) AS avg, COUNT(tobs) AS count \
     FROM measurement WHERE date >= ?";

const STATS_BETWEEN: &str = "SELECT CAST(MIN(tobs) AS REAL) AS min, CAST(MAX(tobs) AS REAL) AS max, \
     AVG(tobs) AS avg, COUNT(tobs) AS count \
     FROM measurement WHERE date >= ? AND date <= ?";

const SUMMARY: &str = "SELECT (SELECT COUNT(*) FROM station) AS station_count, \
     COUNT(*) AS measurement_count, MIN(date) AS first_date, MAX(date) AS last_date \
     FROM measurement";

const ACTIVITY: &str = "SELECT station, COUNT(*) AS observation_count FROM measurement \
     GROUP BY station ORDER BY observation_count DESC, station ASC";

/// Compute the start of the trailing twelve month window ending at `reference`.
///
/// Month arithmetic is calendar based, so `2016-02-29` maps to `2015-02-28`.
pub fn trailing_year_cutoff(reference: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(reference, DATE_FORMAT).map_err(|e| {
        ClimateError::ReferenceDate {
            date: reference.to_string(),
            message: e.to_string(),
        }
    })?;

    let cutoff = date
        .checked_sub_months(Months::new(12))
        .ok_or_else(|| ClimateError::ReferenceDate {
            date: reference.to_string(),
            message: "cannot step back twelve months".to_string(),
        })?;

    Ok(cutoff.format(DATE_FORMAT).to_string())
}

/// Shared handle to the read-only climate database
#[derive(Debug, Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
    path: PathBuf,
}

impl ClimateStore {
    /// Open the database at `path` in read-only mode
    pub async fn open(path: &Path, max_connections: u32) -> Result<Self> {
        // Check if the file exists; SQLite would otherwise report a vague error
        if !path.exists() {
            return Err(ClimateError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", path.display()),
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("Opened climate database: {}", path.display());

        Ok(Self {
            pool,
            path: path.to_path_buf(),
        })
    }

    /// Location of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// `(date, prcp)` for every measurement on or after `cutoff`, in storage order.
    pub async fn list_precipitation_since(&self, cutoff: &str) -> Result<Vec<PrecipitationReading>> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, PrecipitationReading>(PRECIPITATION_SINCE)
            .bind(cutoff)
            .fetch_all(&mut *conn)
            .await?;

        debug!(cutoff = cutoff, rows = rows.len(), "Fetched precipitation");
        Ok(rows)
    }

    /// Every row of the station table
    pub async fn list_stations(&self) -> Result<Vec<Station>> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, Station>(ALL_STATIONS)
            .fetch_all(&mut *conn)
            .await?;

        debug!(rows = rows.len(), "Fetched stations");
        Ok(rows)
    }

    /// `(date, tobs)` for one station on or after `cutoff`
    pub async fn list_temperatures_for_station(
        &self,
        station_id: &str,
        cutoff: &str,
    ) -> Result<Vec<TemperatureReading>> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, TemperatureReading>(STATION_TEMPERATURES_SINCE)
            .bind(station_id)
            .bind(cutoff)
            .fetch_all(&mut *conn)
            .await?;

        debug!(
            station = station_id,
            cutoff = cutoff,
            rows = rows.len(),
            "Fetched station temperatures"
        );
        Ok(rows)
    }

    /// Minimum, maximum and mean `tobs` over `date >= start` (and `date <= end`).
    ///
    /// An empty window yields `None` for every statistic.
    pub async fn temperature_stats(&self, start: &str, end: Option<&str>) -> Result<TemperatureStats> {
        let mut conn = self.pool.acquire().await?;

        let query = match end {
            Some(end) => sqlx::query_as::<_, TemperatureStats>(STATS_BETWEEN)
                .bind(start)
                .bind(end),
            None => sqlx::query_as::<_, TemperatureStats>(STATS_FROM).bind(start),
        };
        let stats = query.fetch_one(&mut *conn).await?;

        debug!(
            start = start,
            end = end.unwrap_or("none"),
            count = stats.count,
            "Computed temperature stats"
        );
        Ok(stats)
    }

    /// Row counts and date coverage
    pub async fn dataset_summary(&self) -> Result<DatasetSummary> {
        let mut conn = self.pool.acquire().await?;

        let summary = sqlx::query_as::<_, DatasetSummary>(SUMMARY)
            .fetch_one(&mut *conn)
            .await?;

        Ok(summary)
    }

    /// Stations ranked by number of measurement rows, busiest first
    pub async fn station_activity(&self) -> Result<Vec<StationActivity>> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, StationActivity>(ACTIVITY)
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows)
    }
}
