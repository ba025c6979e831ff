//! hawaii-climate - a read-only JSON API over historical Hawaii weather data
//!
//! This is the main entry point for the hawaii-climate server.

use std::net::SocketAddr;
use std::time::Instant;
use tokio::signal;
use tracing::info;

use hawaii_climate::{
    build_router, init_tracing, log_database_stats, log_error, log_operation_end,
    log_operation_start, AppState, ClimateError, ClimateStore, Config, Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    init_tracing(&config.log_level);

    info!("Starting hawaii-climate v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        log_error(&e, "configuration");
        e
    })?;

    // Open the database once; the pool is shared by every request
    let database_path = config.database.path.clone();
    let open_started = Instant::now();
    log_operation_start("database_open", Some(&database_path.display().to_string()));

    let store = ClimateStore::open(&database_path, config.database.max_connections)
        .await
        .map_err(|e| {
            log_error(&e, "database_open");
            log_operation_end("database_open", open_started, false);
            e
        })?;

    let summary = store.dataset_summary().await.map_err(|e| {
        log_error(&e, "database_summary");
        e
    })?;
    log_database_stats(&database_path.display().to_string(), &summary);
    log_operation_end("database_open", open_started, true);

    let state = AppState::new_shared(config.clone(), store.clone())?;
    info!(
        cutoff = %state.cutoff_date,
        station = state.tobs_station,
        "Trailing-year window configured"
    );

    let app = build_router(state);

    // Create the server address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| ClimateError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server is ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Server error: {}", e),
        })?;

    store.close().await;
    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
