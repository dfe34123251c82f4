//! Application state for the take-home pay API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources shared across all request handlers, i.e. the loaded rate
/// tables. The tables are read-only after load, so the state is freely
/// cloneable and safe to use from concurrent handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate-table configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
