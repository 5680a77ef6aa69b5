//! Shuttle line type.

use super::{Location, Point};

/// A named shuttle ("cart") line with its stops in running order.
///
/// Only consecutive stops are directly connected by the shuttle, in both
/// directions. Reaching a stop further along the line means chaining hops.
#[derive(Debug, Clone, PartialEq)]
pub struct ShuttleLine {
    name: String,
    stops: Vec<Location>,
}

impl ShuttleLine {
    /// Create a line from already-named stops.
    pub fn new(name: impl Into<String>, stops: Vec<Location>) -> Self {
        Self {
            name: name.into(),
            stops,
        }
    }

    /// Create a line from bare coordinates.
    ///
    /// Stops are named `"<line name> Station <n>"` with `n` counting from 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_server::domain::{Point, ShuttleLine};
    ///
    /// let line = ShuttleLine::from_points("Blue", [Point::new(0.0, 0.0), Point::new(5.0, 0.0)]);
    /// assert_eq!(line.stops()[1].name(), "Blue Station 2");
    /// ```
    pub fn from_points(name: impl Into<String>, points: impl IntoIterator<Item = Point>) -> Self {
        let name = name.into();
        let stops = points
            .into_iter()
            .enumerate()
            .map(|(idx, point)| Location::new(format!("{} Station {}", name, idx + 1), point))
            .collect();
        Self { name, stops }
    }

    /// Returns the line name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stops in running order.
    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    /// Iterate over directly connected stop pairs.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (&Location, &Location)> {
        self.stops.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}
