//! Print a summary of a climate database: row counts, date coverage, stations
//! and how many observations each station recorded.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use hawaii_climate::{ClimateStore, MOST_ACTIVE_STATION, REFERENCE_DATE};

#[derive(Parser, Debug)]
#[command(name = "inspect_db", about = "Summarise a hawaii-climate SQLite database")]
struct Args {
    /// Path to the SQLite database
    #[arg(default_value = "Resources/hawaii.sqlite")]
    database: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("Inspecting database: {}", args.database.display());

    let store = ClimateStore::open(&args.database, 1)
        .await
        .with_context(|| format!("failed to open {}", args.database.display()))?;

    let summary = store
        .dataset_summary()
        .await
        .context("failed to summarise measurement table")?;

    println!("\n=== DATASET ===");
    println!("  stations:     {}", summary.station_count);
    println!("  measurements: {}", summary.measurement_count);
    println!(
        "  date range:   {} .. {}",
        summary.first_date.as_deref().unwrap_or("-"),
        summary.last_date.as_deref().unwrap_or("-")
    );
    if summary.last_date.as_deref() != Some(REFERENCE_DATE) {
        println!(
            "  note: last date differs from the fixed reference date {}",
            REFERENCE_DATE
        );
    }

    let stations = store.list_stations().await.context("failed to list stations")?;

    println!("\n=== STATIONS ===");
    for station in &stations {
        println!(
            "  {} {:<40} lat={:>9.4} lon={:>10.4} elev={:>6.1}",
            station.station, station.name, station.latitude, station.longitude, station.elevation
        );
    }

    let activity = store
        .station_activity()
        .await
        .context("failed to rank stations")?;

    println!("\n=== OBSERVATIONS PER STATION ===");
    for row in &activity {
        let marker = if row.station == MOST_ACTIVE_STATION { " *" } else { "" };
        println!("  {} {:>6}{}", row.station, row.observation_count, marker);
    }

    if let Some(top) = activity
        .first()
        .filter(|top| top.station != MOST_ACTIVE_STATION)
    {
        println!(
            "\nwarning: busiest station is {}, /api/v1.0/tobs serves {}",
            top.station, MOST_ACTIVE_STATION
        );
    }

    store.close().await;
    Ok(())
}
