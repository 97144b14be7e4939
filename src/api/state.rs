//! Application State
//!
//! Shared state accessible by all handlers: the theme registry, built before
//! the server starts and never mutated afterwards.

use std::sync::Arc;

use crate::chart::{Theme, ThemeRegistry};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Registered themes with the dashboard style enabled
    pub themes: Arc<ThemeRegistry>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State with the dashboard theme registry
    pub fn new() -> Self {
        Self::with_themes(ThemeRegistry::dashboard())
    }

    /// State with a custom theme registry
    pub fn with_themes(themes: ThemeRegistry) -> Self {
        Self {
            themes: Arc::new(themes),
        }
    }

    /// Theme applied to every rendered chart
    pub fn theme(&self) -> &Theme {
        self.themes.active()
    }
}
