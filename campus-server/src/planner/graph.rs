//! Travel-time graph construction.
//!
//! Every pair of locations is connected on foot; adjacent stops of a shuttle
//! line are additionally connected by shuttle. Each unordered pair carries a
//! single travel time, and the shuttle time replaces the walking time for
//! shuttle-adjacent pairs even when walking would be quicker.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::{Location, Network};
use crate::geometry::travel_time;

/// Canonical key for an unordered pair of location indices.
///
/// The smaller index always comes first, so `(a, b)` and `(b, a)` map to the
/// same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey(usize, usize);

impl PairKey {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b { PairKey(a, b) } else { PairKey(b, a) }
    }
}

/// Travel time in minutes for each unordered pair of locations.
#[derive(Debug, Clone, Default)]
pub struct EdgeWeights {
    minutes: HashMap<PairKey, f64>,
}

impl EdgeWeights {
    /// Set the travel time for a pair, returning the previous value.
    pub fn insert(&mut self, a: usize, b: usize, minutes: f64) -> Option<f64> {
        self.minutes.insert(PairKey::new(a, b), minutes)
    }

    /// Travel time between two locations, in either direction.
    pub fn get(&self, a: usize, b: usize) -> Option<f64> {
        self.minutes.get(&PairKey::new(a, b)).copied()
    }

    /// Number of unordered pairs with a travel time.
    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }
}

/// Directed record of hops that can be ridden on a shuttle.
///
/// Used only to label legs; the travel time lives in [`EdgeWeights`].
#[derive(Debug, Clone, Default)]
pub struct ShuttleLinks {
    links: HashMap<usize, HashSet<usize>>,
}

impl ShuttleLinks {
    /// Mark the hop in both directions.
    pub fn mark(&mut self, a: usize, b: usize) {
        self.links.entry(a).or_default().insert(b);
        self.links.entry(b).or_default().insert(a);
    }

    /// Returns true if `from -> to` is a shuttle hop.
    pub fn contains(&self, from: usize, to: usize) -> bool {
        self.links.get(&from).is_some_and(|dests| dests.contains(&to))
    }

    /// Number of directed shuttle hops.
    pub fn len(&self) -> usize {
        self.links.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// The routing graph for one request.
///
/// Locations are stored once each, in first-seen order: start, destination,
/// then every shuttle stop. Graph algorithms refer to them by index.
#[derive(Debug, Clone)]
pub struct TravelGraph {
    locations: Vec<Location>,
    index: HashMap<Location, usize>,
    adjacency: Vec<Vec<usize>>,
    weights: EdgeWeights,
    shuttle: ShuttleLinks,
}

impl TravelGraph {
    /// Build the graph for a network.
    pub fn build(network: &Network) -> Self {
        let mut locations = Vec::new();
        let mut index = HashMap::new();
        for location in network.locations() {
            if !index.contains_key(location) {
                index.insert(location.clone(), locations.len());
                locations.push(location.clone());
            }
        }

        let count = locations.len();
        let mut adjacency = vec![Vec::new(); count];
        let mut weights = EdgeWeights::default();

        for a in 0..count {
            for b in 0..count {
                if a == b {
                    continue;
                }
                adjacency[a].push(b);
                let walk = travel_time(
                    locations[a].coordinates(),
                    locations[b].coordinates(),
                    network.walking_speed,
                );
                weights.insert(a, b, walk);
            }
        }

        let mut shuttle = ShuttleLinks::default();
        for line in &network.lines {
            for (from, to) in line.adjacent_pairs() {
                let (a, b) = (index[from], index[to]);
                if a == b {
                    continue;
                }
                let ride = travel_time(from.coordinates(), to.coordinates(), network.shuttle_speed);
                let previous = weights.insert(a, b, ride);
                if previous.is_some_and(|walk| walk < ride) {
                    debug!(
                        line = line.name(),
                        from = %from,
                        to = %to,
                        walk = ?previous,
                        ride,
                        "shuttle hop is slower than walking; keeping shuttle time"
                    );
                }
                shuttle.mark(a, b);
            }
        }

        trace!(
            locations = count,
            pairs = weights.len(),
            shuttle_hops = shuttle.len(),
            "built travel graph"
        );

        TravelGraph {
            locations,
            index,
            adjacency,
            weights,
            shuttle,
        }
    }

    /// Number of distinct locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Returns the index of a location, if it is part of the graph.
    pub fn index_of(&self, location: &Location) -> Option<usize> {
        self.index.get(location).copied()
    }

    /// Returns the location at an index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn location(&self, idx: usize) -> &Location {
        &self.locations[idx]
    }

    /// Returns all locations in index order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Locations directly reachable from `idx`.
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        self.adjacency.get(idx).map(Vec::as_slice).unwrap_or_default()
    }

    /// Travel time in minutes between two locations.
    pub fn weight(&self, a: usize, b: usize) -> Option<f64> {
        self.weights.get(a, b)
    }

    /// Returns the edge weight table.
    pub fn weights(&self) -> &EdgeWeights {
        &self.weights
    }

    /// Returns true if `from -> to` is ridden on a shuttle.
    pub fn is_shuttle_hop(&self, from: usize, to: usize) -> bool {
        self.shuttle.contains(from, to)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Point, ShuttleLine};
    use proptest::prelude::*;

    fn point() -> impl Strategy<Value = Point> {
        (0u32..2000, 0u32..2000).prop_map(|(x, y)| Point::new(x.into(), y.into()))
    }

    fn network() -> impl Strategy<Value = Network> {
        (
            point(),
            point(),
            prop::collection::vec(prop::collection::vec(point(), 0..4), 0..3),
            1.0f64..2000.0,
        )
            .prop_map(|(start, dest, lines, speed)| {
                let lines = lines
                    .into_iter()
                    .enumerate()
                    .map(|(i, pts)| ShuttleLine::from_points(format!("Line {}", i), pts))
                    .collect();
                Network::from_points(start, dest, lines, speed)
            })
    }

    proptest! {
        /// Weight lookup doesn't depend on argument order
        #[test]
        fn weights_are_symmetric(net in network()) {
            let graph = TravelGraph::build(&net);
            for a in 0..graph.len() {
                for b in 0..graph.len() {
                    prop_assert_eq!(graph.weight(a, b), graph.weight(b, a));
                }
            }
        }

        /// Every distinct pair has exactly one travel time
        #[test]
        fn graph_is_complete(net in network()) {
            let graph = TravelGraph::build(&net);
            let n = graph.len();
            prop_assert_eq!(graph.weights().len(), n * (n - 1) / 2);
        }

        /// Shuttle hops are marked in both directions
        #[test]
        fn shuttle_links_are_symmetric(net in network()) {
            let graph = TravelGraph::build(&net);
            for a in 0..graph.len() {
                for b in 0..graph.len() {
                    prop_assert_eq!(graph.is_shuttle_hop(a, b), graph.is_shuttle_hop(b, a));
                }
            }
        }
    }
}
