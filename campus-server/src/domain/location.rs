//! Location types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A 2D coordinate on the campus plane.
///
/// Coordinates are compared and hashed by bit pattern so that `Point` can be
/// used as (part of) a map key. `-0.0` is normalised to `0.0` first, keeping
/// `Eq` and `Hash` consistent for the two zeros.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn key(&self) -> (u64, u64) {
        fn bits(v: f64) -> u64 {
            if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
        }
        (bits(self.x), bits(self.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A named point taking part in the routing graph.
///
/// Called a station in campus terms: the start, the destination and every
/// shuttle stop are all locations. Two locations are equal iff both the name
/// and the coordinates match.
///
/// # Examples
///
/// ```
/// use campus_server::domain::{Location, Point};
///
/// let a = Location::new("Library", Point::new(10.0, 20.0));
/// let b = Location::new("Library", Point::new(10.0, 20.0));
/// let c = Location::new("Library", Point::new(10.0, 21.0));
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_eq!(a.to_string(), "Library");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    name: String,
    coordinates: Point,
}

impl Location {
    /// Create a new location.
    pub fn new(name: impl Into<String>, coordinates: Point) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the coordinates.
    pub fn coordinates(&self) -> Point {
        self.coordinates
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
