//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{config::Config, services::ProfileProvider};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Source of composite profile records
    pub profiles: Arc<dyn ProfileProvider>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(profiles: Arc<dyn ProfileProvider>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { profiles, config }),
        }
    }

    /// Get a reference to the profile provider
    pub fn profiles(&self) -> &dyn ProfileProvider {
        self.inner.profiles.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
