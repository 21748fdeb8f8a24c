//! Application state for the Result Aggregation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::AssessmentStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded school configuration and the assessment data store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded school configuration.
    config: Arc<ConfigLoader>,
    /// The backing assessment data store.
    store: Arc<dyn AssessmentStore>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader
    /// and assessment store.
    pub fn new(config: ConfigLoader, store: impl AssessmentStore + 'static) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the assessment store.
    pub fn store(&self) -> &dyn AssessmentStore {
        self.store.as_ref()
    }
}
