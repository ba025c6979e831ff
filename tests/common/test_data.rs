//! Test data generation utilities.
//!
//! Builds small SQLite files shaped like the production climate database, with
//! known rows so endpoint results can be checked exactly.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use std::path::Path;

type Result<T> = std::result::Result<T, sqlx::Error>;

/// `(station, date, prcp, tobs)`
pub type MeasurementRow = (&'static str, &'static str, Option<f64>, f64);

/// `(station, name, latitude, longitude, elevation)`
pub type StationRow = (&'static str, &'static str, f64, f64, f64);

const SCHEMA: &str = "\
    CREATE TABLE measurement (\
        id INTEGER PRIMARY KEY, station TEXT, date TEXT, prcp FLOAT, tobs FLOAT);\
    CREATE TABLE station (\
        id INTEGER PRIMARY KEY, station TEXT, name TEXT, \
        latitude FLOAT, longitude FLOAT, elevation FLOAT);";

/// A subset of the real Hawaii station list
pub const STATIONS: &[StationRow] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC00514830", "KUALOA RANCH HEADQUARTERS 886.9, HI US", 21.5213, -157.8374, 7.0),
    ("USC00517948", "PEARL CITY, HI US", 21.3934, -157.9751, 11.9),
    ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
];

/// Readings spread around the trailing-year boundary (2016-08-23)
pub const MEASUREMENTS: &[MeasurementRow] = &[
    ("USC00519281", "2010-01-01", Some(0.15), 54.0),
    ("USC00519397", "2016-08-22", Some(0.4), 78.0),
    ("USC00519281", "2016-08-22", Some(1.2), 76.0),
    ("USC00519281", "2016-08-23", Some(1.79), 77.0),
    ("USC00519397", "2016-08-23", Some(0.0), 81.0),
    ("USC00513117", "2016-08-23", Some(0.15), 76.0),
    ("USC00517948", "2016-08-23", None, 80.0),
    ("USC00519281", "2016-12-25", Some(0.0), 67.0),
    ("USC00514830", "2017-02-14", None, 65.0),
    ("USC00519281", "2017-04-30", Some(2.2), 72.0),
    ("USC00519397", "2017-07-04", Some(0.02), 82.0),
    ("USC00519281", "2017-08-18", None, 79.0),
    ("USC00519397", "2017-08-23", Some(0.0), 81.0),
];

/// Create a climate database at `path` with the given rows
pub async fn create_database(
    path: &Path,
    measurements: &[MeasurementRow],
    stations: &[StationRow],
) -> Result<()> {
    let mut conn = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .connect()
        .await?;

    sqlx::raw_sql(SCHEMA).execute(&mut conn).await?;

    for &(station, date, prcp, tobs) in measurements {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(station)
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(&mut conn)
            .await?;
    }

    for &(station, name, latitude, longitude, elevation) in stations {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(station)
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .bind(elevation)
        .execute(&mut conn)
        .await?;
    }

    conn.close().await
}

/// Create the default test database
pub async fn create_test_climate_db(path: &Path) -> Result<()> {
    create_database(path, MEASUREMENTS, STATIONS).await
}
