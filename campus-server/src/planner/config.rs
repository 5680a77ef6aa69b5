//! Planner configuration.

/// Configuration parameters for route planning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Stop the shortest-path search once the destination is settled.
    /// Results are identical either way; the full search also resolves
    /// every other location.
    pub stop_at_destination: bool,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(stop_at_destination: bool) -> Self {
        Self {
            stop_at_destination,
        }
    }
}
