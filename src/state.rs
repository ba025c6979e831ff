//! Application state management for hawaii-climate.
//!
//! This module defines the shared state that is passed to all handlers: the
//! configuration, the database handle and the precomputed trailing-year cutoff.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::store::{trailing_year_cutoff, ClimateStore, MOST_ACTIVE_STATION, REFERENCE_DATE};

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Read-only database handle
    pub store: ClimateStore,
    /// First date of the "last 12 months" window
    pub cutoff_date: String,
    /// Station served by the tobs endpoint
    pub tobs_station: &'static str,
}

impl AppState {
    /// Create a new AppState, deriving the cutoff from the fixed reference date
    pub fn new(config: Config, store: ClimateStore) -> Result<Self> {
        let cutoff_date = trailing_year_cutoff(REFERENCE_DATE)?;

        Ok(Self {
            config,
            store,
            cutoff_date,
            tobs_station: MOST_ACTIVE_STATION,
        })
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, store: ClimateStore) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::new(config, store)?))
    }
}
