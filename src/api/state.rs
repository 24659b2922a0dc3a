//! Application state for the Severance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and, for tests, an optional fixed date
/// standing in for the server clock. Handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// A fixed "today"; `None` reads the clock on each request.
    today: Option<NaiveDate>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            today: None,
        }
    }

    /// Creates an application state whose clock always reads `today`.
    pub fn with_today(config: ConfigLoader, today: NaiveDate) -> Self {
        Self {
            config: Arc::new(config),
            today: Some(today),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the current date, the latest accepted hire date.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}
