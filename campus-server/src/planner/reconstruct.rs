//! Turning a predecessor chain into an itinerary.

use tracing::warn;

use crate::domain::{Network, Route, RouteLeg};
use crate::geometry::travel_time;

use super::dijkstra::ShortestPaths;
use super::graph::TravelGraph;
use super::search::RouteError;

/// Build the route from the search's source to `network.destination`.
///
/// Each leg takes its duration from the graph and is marked as a shuttle ride
/// iff the directed hop is a shuttle link.
///
/// # Errors
///
/// Returns `Err` if the destination is not in the graph, or if its
/// predecessor chain doesn't lead back to the start location.
pub fn reconstruct(
    graph: &TravelGraph,
    paths: &ShortestPaths,
    network: &Network,
) -> Result<Route, RouteError> {
    let target = graph
        .index_of(&network.destination)
        .ok_or_else(|| RouteError::MissingLocation(network.destination.name().to_string()))?;

    let path = paths.path_to(target);
    let reached_start = path
        .first()
        .is_some_and(|&first| graph.location(first) == &network.start);
    if !reached_start {
        return Err(RouteError::Unreachable {
            from: network.start.name().to_string(),
            to: network.destination.name().to_string(),
        });
    }

    let legs = path
        .windows(2)
        .map(|hop| {
            let (a, b) = (hop[0], hop[1]);
            let origin = graph.location(a);
            let next = graph.location(b);
            let duration = graph.weight(a, b).unwrap_or_else(|| {
                warn!(from = %origin, to = %next, "no stored travel time, recomputing walk");
                travel_time(
                    origin.coordinates(),
                    next.coordinates(),
                    network.walking_speed,
                )
            });
            if graph.is_shuttle_hop(a, b) {
                RouteLeg::shuttle(origin.name(), next.name(), duration)
            } else {
                RouteLeg::walk(origin.name(), next.name(), duration)
            }
        })
        .collect();

    Ok(Route::new(legs)?)
}
