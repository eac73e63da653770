//! Application state for the shift compliance API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, RuleConfig};

/// Shared application state.
///
/// Holds the rules loaded at startup. Requests may override them per call.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rule configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the default rules for requests that bring none.
    pub fn rules(&self) -> &RuleConfig {
        self.config.rules()
    }
}
