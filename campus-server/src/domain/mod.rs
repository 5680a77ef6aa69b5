//! Domain types for the campus navigator.
//!
//! This module contains the validated value types the planner consumes and
//! produces. Networks are checked with [`Network::validate`] before routing,
//! and routes enforce their invariants at construction time.

mod error;
mod line;
mod location;
mod network;
mod route;

pub use error::{DomainError, NetworkError};
pub use line::ShuttleLine;
pub use location::{Location, Point};
pub use network::{DESTINATION_NAME, Network, START_NAME, WALKING_SPEED};
pub use route::{Route, RouteLeg, TravelMode};
