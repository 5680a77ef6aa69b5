//! Single-source shortest paths over a [`TravelGraph`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use super::graph::TravelGraph;

/// Queue entry: a location and the cost it was queued with.
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    node: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the cheapest entry first
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-known travel times and predecessors from one source location.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Run Dijkstra from `source`.
    ///
    /// With `stop_at` set, the search ends as soon as that location is
    /// settled. Distances of locations settled so far are final either way,
    /// since all weights are non-negative.
    pub fn solve(graph: &TravelGraph, source: usize, stop_at: Option<usize>) -> Self {
        let mut distances = vec![f64::INFINITY; graph.len()];
        let mut predecessors = vec![None; graph.len()];
        let mut queue = BinaryHeap::new();
        let mut settled = 0usize;

        if let Some(dist) = distances.get_mut(source) {
            *dist = 0.0;
            queue.push(State {
                cost: 0.0,
                node: source,
            });
        }

        while let Some(State { cost, node }) = queue.pop() {
            // Skip stale entries
            if cost > distances[node] {
                continue;
            }
            settled += 1;

            if stop_at == Some(node) {
                trace!(node, cost, "destination settled, stopping early");
                break;
            }

            for &neighbor in graph.neighbors(node) {
                let Some(weight) = graph.weight(node, neighbor) else {
                    continue;
                };
                let candidate = cost + weight;
                if candidate < distances[neighbor] {
                    distances[neighbor] = candidate;
                    predecessors[neighbor] = Some(node);
                    queue.push(State {
                        cost: candidate,
                        node: neighbor,
                    });
                }
            }
        }

        trace!(source, settled, "shortest path search complete");

        ShortestPaths {
            source,
            distances,
            predecessors,
        }
    }

    /// The location the search started from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Minimum travel time to `idx`, or `None` if it was never reached.
    pub fn distance(&self, idx: usize) -> Option<f64> {
        self.distances
            .get(idx)
            .copied()
            .filter(|dist| dist.is_finite())
    }

    /// The location before `idx` on its best path.
    pub fn predecessor(&self, idx: usize) -> Option<usize> {
        self.predecessors.get(idx).copied().flatten()
    }

    /// Follow predecessors back from `target` and return the path in travel
    /// order.
    ///
    /// The path always ends at `target`. It starts at the source only if
    /// `target` was reached; otherwise it is just `[target]`.
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Location, Network, Point, ShuttleLine, WALKING_SPEED};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn heap_pops_cheapest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(State { cost: 3.0, node: 0 });
        heap.push(State { cost: 1.0, node: 1 });
        heap.push(State { cost: 2.0, node: 2 });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|s| s.node).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn direct_walk() {
        let net = Network::from_points(
            Point::new(0.0, 0.0),
            Point::new(3000.0, 4000.0),
            vec![],
            500.0,
        );
        let graph = TravelGraph::build(&net);
        let paths = ShortestPaths::solve(&graph, 0, None);

        assert_eq!(paths.source(), 0);
        assert_eq!(paths.distance(0), Some(0.0));
        assert!(close(paths.distance(1).unwrap(), 30.0));
        assert_eq!(paths.predecessor(1), Some(0));
        assert_eq!(paths.predecessor(0), None);
        assert_eq!(paths.path_to(1), vec![0, 1]);
    }

    #[test]
    fn chains_adjacent_shuttle_hops() {
        // A line along the x axis; riding three hops beats walking the whole way
        let line = ShuttleLine::from_points(
            "East",
            [
                Point::new(0.0, 0.0),
                Point::new(1000.0, 0.0),
                Point::new(2000.0, 0.0),
                Point::new(3000.0, 0.0),
            ],
        );
        let net = Network::new(
            Location::new("Starting Point", Point::new(0.0, 0.0)),
            Location::new("Final Destination", Point::new(3000.0, 0.0)),
            vec![line.clone()],
            1000.0,
        );
        let graph = TravelGraph::build(&net);
        let dest = graph.index_of(&net.destination).unwrap();
        let paths = ShortestPaths::solve(&graph, 0, None);

        // 0 walk to stop 1, 3 one-minute rides, 0 walk from stop 4
        assert!(close(paths.distance(dest).unwrap(), 3.0));
        let path = paths.path_to(dest);
        let names: Vec<_> = path.iter().map(|&i| graph.location(i).name()).collect();
        assert_eq!(
            names,
            [
                "Starting Point",
                "East Station 1",
                "East Station 2",
                "East Station 3",
                "East Station 4",
                "Final Destination"
            ]
        );
        assert!(paths.distance(dest).unwrap() < 3000.0 / WALKING_SPEED);
    }

    #[test]
    fn early_exit_matches_full_search() {
        let line = ShuttleLine::from_points(
            "L",
            [Point::new(100.0, 0.0), Point::new(900.0, 0.0), Point::new(900.0, 900.0)],
        );
        let net = Network::from_points(
            Point::new(0.0, 0.0),
            Point::new(1000.0, 1000.0),
            vec![line],
            400.0,
        );
        let graph = TravelGraph::build(&net);

        let full = ShortestPaths::solve(&graph, 0, None);
        let early = ShortestPaths::solve(&graph, 0, Some(1));

        assert_eq!(full.distance(1), early.distance(1));
        assert_eq!(full.path_to(1), early.path_to(1));
    }

    #[test]
    fn unreached_location_has_no_distance() {
        let net = Network::from_points(Point::new(0.0, 0.0), Point::new(1.0, 1.0), vec![], 1.0);
        let graph = TravelGraph::build(&net);
        let paths = ShortestPaths::solve(&graph, 0, Some(0));

        assert_eq!(paths.distance(0), Some(0.0));
        assert_eq!(paths.distance(1), None);
        assert_eq!(paths.path_to(1), vec![1]);
    }

    #[test]
    fn out_of_range_source_reaches_nothing() {
        let net = Network::from_points(Point::new(0.0, 0.0), Point::new(1.0, 1.0), vec![], 1.0);
        let graph = TravelGraph::build(&net);
        let paths = ShortestPaths::solve(&graph, 7, None);

        assert_eq!(paths.distance(0), None);
        assert_eq!(paths.distance(7), None);
    }
}
