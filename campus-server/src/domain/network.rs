//! The routing request input.

use std::collections::HashMap;

use super::{Location, NetworkError, Point, ShuttleLine};
use crate::geometry;

/// Average walking speed in distance units per minute (6 km/h in metres).
pub const WALKING_SPEED: f64 = 1000.0 / 6.0;

/// Conventional name of the start location.
pub const START_NAME: &str = "Starting Point";

/// Conventional name of the destination location.
pub const DESTINATION_NAME: &str = "Final Destination";

/// A complete routing request: where from, where to, and how fast.
///
/// Speeds are in distance units per minute. The walking speed is always
/// [`WALKING_SPEED`]; only the shuttle speed varies between networks.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub start: Location,
    pub destination: Location,
    pub lines: Vec<ShuttleLine>,
    pub shuttle_speed: f64,
    pub walking_speed: f64,
}

impl Network {
    /// Create a network using the fixed walking speed.
    pub fn new(
        start: Location,
        destination: Location,
        lines: Vec<ShuttleLine>,
        shuttle_speed: f64,
    ) -> Self {
        Self {
            start,
            destination,
            lines,
            shuttle_speed,
            walking_speed: WALKING_SPEED,
        }
    }

    /// Create a network from bare start and destination points, using the
    /// conventional location names.
    pub fn from_points(
        start: Point,
        destination: Point,
        lines: Vec<ShuttleLine>,
        shuttle_speed: f64,
    ) -> Self {
        Self::new(
            Location::new(START_NAME, start),
            Location::new(DESTINATION_NAME, destination),
            lines,
            shuttle_speed,
        )
    }

    /// Convert km/h to distance units (metres) per minute.
    ///
    /// ```
    /// use campus_server::domain::{Network, WALKING_SPEED};
    ///
    /// assert_eq!(Network::km_per_hour_to_units_per_minute(6.0), WALKING_SPEED);
    /// ```
    pub fn km_per_hour_to_units_per_minute(speed: f64) -> f64 {
        speed * 1000.0 / 60.0
    }

    /// Iterate over every location in the network, duplicates included.
    ///
    /// Order is start, destination, then each line's stops in line order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        [&self.start, &self.destination]
            .into_iter()
            .chain(self.lines.iter().flat_map(|line| line.stops()))
    }

    /// Check that the network can be routed over.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - either speed is not positive and finite
    /// - a location has a non-finite coordinate
    /// - locations are so far apart that a travel time overflows
    /// - a name is used for two different coordinates
    pub fn validate(&self) -> Result<(), NetworkError> {
        check_speed("walking", self.walking_speed)?;
        check_speed("shuttle", self.shuttle_speed)?;

        let mut seen: HashMap<&str, Point> = HashMap::new();
        let mut low = self.start.coordinates();
        let mut high = low;
        for location in self.locations() {
            let point = location.coordinates();
            if !point.is_finite() {
                return Err(NetworkError::InvalidCoordinate(location.name().to_string()));
            }
            low = Point::new(low.x.min(point.x), low.y.min(point.y));
            high = Point::new(high.x.max(point.x), high.y.max(point.y));
            match seen.get(location.name()) {
                Some(first) if *first != point => {
                    return Err(NetworkError::ConflictingLocation {
                        name: location.name().to_string(),
                        first: *first,
                        second: point,
                    });
                }
                Some(_) => {}
                None => {
                    seen.insert(location.name(), point);
                }
            }
        }

        // The bounding-box diagonal bounds every pairwise distance
        let speed = self.walking_speed.min(self.shuttle_speed);
        let extent = geometry::distance(low, high);
        if !geometry::travel_time(low, high, speed).is_finite() {
            return Err(NetworkError::UnboundedTravelTime { extent, speed });
        }

        Ok(())
    }
}

fn check_speed(which: &'static str, value: f64) -> Result<(), NetworkError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidSpeed { which, value })
    }
}
