//! Route search entry point.
//!
//! Validates the network, builds a request-scoped graph, runs the shortest
//! path search and reconstructs the itinerary.

use tracing::debug;

use crate::domain::{DomainError, Network, NetworkError, Route};

use super::config::PlannerConfig;
use super::dijkstra::ShortestPaths;
use super::graph::TravelGraph;
use super::reconstruct::reconstruct;

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// The network failed validation
    #[error("invalid network: {0}")]
    InvalidNetwork(#[from] NetworkError),

    /// Start or destination is not part of the travel graph
    #[error("location {0} is not part of the travel graph")]
    MissingLocation(String),

    /// The destination's best path doesn't lead back to the start
    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },

    /// The reconstructed legs don't form a valid route
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Everything computed for a single routing request.
///
/// Owned by the call that created it and dropped when it returns, so
/// concurrent requests never see each other's tables.
#[derive(Debug, Clone)]
pub struct RouteContext {
    pub graph: TravelGraph,
    pub paths: ShortestPaths,
}

impl RouteContext {
    /// Build the graph and search it from the start location.
    pub fn solve(network: &Network, config: &PlannerConfig) -> Result<Self, RouteError> {
        let graph = TravelGraph::build(network);
        let source = graph
            .index_of(&network.start)
            .ok_or_else(|| RouteError::MissingLocation(network.start.name().to_string()))?;
        let target = graph
            .index_of(&network.destination)
            .ok_or_else(|| RouteError::MissingLocation(network.destination.name().to_string()))?;

        let stop_at = config.stop_at_destination.then_some(target);
        let paths = ShortestPaths::solve(&graph, source, stop_at);

        Ok(RouteContext { graph, paths })
    }

    /// Reconstruct the route to the network's destination.
    pub fn route(&self, network: &Network) -> Result<Route, RouteError> {
        reconstruct(&self.graph, &self.paths, network)
    }
}

/// Route planner.
///
/// Holds only configuration; every call to [`Planner::plan`] works on its own
/// [`RouteContext`].
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Find the fastest route across the network.
    ///
    /// A network whose start and destination are the same location yields an
    /// empty route.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_server::domain::{Network, Point};
    /// use campus_server::planner::{Planner, PlannerConfig};
    ///
    /// let network = Network::from_points(
    ///     Point::new(0.0, 0.0),
    ///     Point::new(3000.0, 4000.0),
    ///     vec![],
    ///     500.0,
    /// );
    /// let config = PlannerConfig::default();
    /// let route = Planner::new(&config).plan(&network).unwrap();
    ///
    /// assert_eq!(route.legs().len(), 1);
    /// assert!((route.total_duration() - 30.0).abs() < 1e-9);
    /// ```
    pub fn plan(&self, network: &Network) -> Result<Route, RouteError> {
        network.validate()?;

        if network.start == network.destination {
            debug!(location = %network.start, "start is the destination");
            return Ok(Route::empty());
        }

        let context = RouteContext::solve(network, self.config)?;
        let route = context.route(network)?;

        debug!(
            locations = context.graph.len(),
            legs = route.legs().len(),
            shuttle_legs = route.shuttle_leg_count(),
            total_minutes = route.total_duration(),
            "planned route"
        );

        Ok(route)
    }
}

/// Plan a route with the default configuration.
pub fn plan_route(network: &Network) -> Result<Route, RouteError> {
    Planner::new(&PlannerConfig::default()).plan(network)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
