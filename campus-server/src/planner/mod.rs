//! Fastest-route planner.
//!
//! This module answers: "how do I get from here to there across campus as
//! quickly as possible, walking and riding the shuttles?"
//!
//! The network is turned into a complete travel-time graph (walking between
//! any two locations, shuttle rides between adjacent stops), searched with
//! Dijkstra from the start, and the best path is read back as walk and ride
//! legs.

mod config;
mod dijkstra;
mod graph;
mod reconstruct;
mod search;

pub use config::PlannerConfig;
pub use dijkstra::ShortestPaths;
pub use graph::{EdgeWeights, PairKey, ShuttleLinks, TravelGraph};
pub use reconstruct::reconstruct;
pub use search::{Planner, RouteContext, RouteError, plan_route};
