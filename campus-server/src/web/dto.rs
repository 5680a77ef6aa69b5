//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Network, Point, Route, RouteLeg, ShuttleLine};

/// Request to plan a route across a network.
#[derive(Debug, Deserialize)]
pub struct NetworkRequest {
    /// Where the trip starts
    pub start: Point,

    /// Where the trip ends
    pub destination: Point,

    /// Shuttle lines, stops in running order
    #[serde(default)]
    pub lines: Vec<LineRequest>,

    /// Average shuttle speed in km/h
    pub cart_speed_kmh: f64,
}

/// A shuttle line in a request.
#[derive(Debug, Deserialize)]
pub struct LineRequest {
    /// Line name, used to name the stops
    pub name: String,

    /// Stop coordinates in running order
    pub stops: Vec<Point>,
}

impl NetworkRequest {
    /// Convert into a domain Network.
    ///
    /// Stops are named after their line; the network is not validated here.
    pub fn into_network(self) -> Network {
        let lines = self
            .lines
            .into_iter()
            .map(|line| ShuttleLine::from_points(line.name, line.stops))
            .collect();

        Network::from_points(
            self.start,
            self.destination,
            lines,
            Network::km_per_hour_to_units_per_minute(self.cart_speed_kmh),
        )
    }
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Legs in travel order
    pub legs: Vec<RouteLeg>,

    /// Total travel time in minutes
    pub total_minutes: f64,

    /// Number of legs ridden on a shuttle
    pub shuttle_legs: usize,
}

impl RouteResponse {
    /// Create from a domain Route.
    pub fn from_route(route: Route) -> Self {
        let total_minutes = route.total_duration();
        let shuttle_legs = route.shuttle_leg_count();
        Self {
            legs: route.into_legs(),
            total_minutes,
            shuttle_legs,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
