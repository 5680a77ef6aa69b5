//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from parsing and HTTP errors.

use super::Point;

/// A network that cannot be routed over.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// Speed is zero, negative or not a number
    #[error("{which} speed must be positive and finite, got {value}")]
    InvalidSpeed { which: &'static str, value: f64 },

    /// A location has a non-finite coordinate
    #[error("location {0} has a non-finite coordinate")]
    InvalidCoordinate(String),

    /// Locations are too far apart for a finite travel time
    #[error("locations span {extent} units, too far for a finite travel time at {speed} units per minute")]
    UnboundedTravelTime { extent: f64, speed: f64 },

    /// The same name is used for two different places
    #[error("location {name} appears at both {first:?} and {second:?}")]
    ConflictingLocation {
        name: String,
        first: Point,
        second: Point,
    },
}

/// Domain-level errors for data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Consecutive legs don't share an endpoint
    #[error("leg ending at {0} is followed by a leg starting at {1}")]
    LegsNotConnected(String, String),

    /// Leg duration is negative or not a number
    #[error("invalid leg duration: {0}")]
    InvalidDuration(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::InvalidSpeed {
            which: "shuttle",
            value: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "shuttle speed must be positive and finite, got -2"
        );

        let err = NetworkError::InvalidCoordinate("Gym".into());
        assert_eq!(err.to_string(), "location Gym has a non-finite coordinate");

        let err = NetworkError::UnboundedTravelTime {
            extent: f64::INFINITY,
            speed: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "locations span inf units, too far for a finite travel time at 2 units per minute"
        );

        let err = NetworkError::ConflictingLocation {
            name: "Gym".into(),
            first: Point::new(1.0, 2.0),
            second: Point::new(3.0, 4.0),
        };
        assert_eq!(
            err.to_string(),
            "location Gym appears at both (1, 2) and (3, 4)"
        );

        let err = DomainError::LegsNotConnected("A".into(), "B".into());
        assert_eq!(
            err.to_string(),
            "leg ending at A is followed by a leg starting at B"
        );

        let err = DomainError::InvalidDuration(-1.5);
        assert_eq!(err.to_string(), "invalid leg duration: -1.5");
    }
}
