//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Holds configuration only. Graphs and search tables are built per request
/// and never stored here.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Route planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
