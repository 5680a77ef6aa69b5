//! Route types.
//!
//! A `Route` is the planner's output: an ordered itinerary of legs, each
//! either walked or ridden on a shuttle.

use serde::Serialize;

use super::DomainError;

/// How a leg is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// On foot
    Walk,
    /// Riding a shuttle between adjacent stops
    Shuttle,
}

/// One segment of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    /// Origin location name
    pub from: String,
    /// Destination location name
    pub to: String,
    /// Travel time in minutes
    pub duration_minutes: f64,
    /// How the leg is travelled
    pub mode: TravelMode,
}

impl RouteLeg {
    /// Creates a walking leg.
    pub fn walk(from: impl Into<String>, to: impl Into<String>, duration_minutes: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            duration_minutes,
            mode: TravelMode::Walk,
        }
    }

    /// Creates a shuttle leg.
    pub fn shuttle(from: impl Into<String>, to: impl Into<String>, duration_minutes: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            duration_minutes,
            mode: TravelMode::Shuttle,
        }
    }

    /// Returns true if this leg is ridden on a shuttle.
    pub fn is_shuttle(&self) -> bool {
        self.mode == TravelMode::Shuttle
    }
}

/// A complete itinerary from start to destination.
///
/// # Invariants
///
/// - Consecutive legs connect (destination of one = origin of next)
/// - Every duration is finite and non-negative
///
/// An empty route is valid: it is the answer when start and destination are
/// the same place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Route {
    legs: Vec<RouteLeg>,
}

impl Route {
    /// Constructs a route from legs.
    ///
    /// # Errors
    ///
    /// Returns `Err` if legs don't connect or a duration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_server::domain::{Route, RouteLeg};
    ///
    /// let route = Route::new(vec![
    ///     RouteLeg::walk("Starting Point", "Blue Station 1", 1.5),
    ///     RouteLeg::shuttle("Blue Station 1", "Final Destination", 2.0),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(route.total_duration(), 3.5);
    /// assert_eq!(route.shuttle_leg_count(), 1);
    /// ```
    pub fn new(legs: Vec<RouteLeg>) -> Result<Self, DomainError> {
        for leg in &legs {
            if !(leg.duration_minutes.is_finite() && leg.duration_minutes >= 0.0) {
                return Err(DomainError::InvalidDuration(leg.duration_minutes));
            }
        }

        for window in legs.windows(2) {
            if window[0].to != window[1].from {
                return Err(DomainError::LegsNotConnected(
                    window[0].to.clone(),
                    window[1].from.clone(),
                ));
            }
        }

        Ok(Route { legs })
    }

    /// The empty route.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    /// Returns true if there is nothing to travel.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Total travel time in minutes.
    pub fn total_duration(&self) -> f64 {
        self.legs.iter().map(|leg| leg.duration_minutes).sum()
    }

    /// Number of legs ridden on a shuttle.
    pub fn shuttle_leg_count(&self) -> usize {
        self.legs.iter().filter(|leg| leg.is_shuttle()).count()
    }

    /// Origin name of the first leg.
    pub fn origin(&self) -> Option<&str> {
        self.legs.first().map(|leg| leg.from.as_str())
    }

    /// Destination name of the last leg.
    pub fn destination(&self) -> Option<&str> {
        self.legs.last().map(|leg| leg.to.as_str())
    }

    /// Consume the route, returning its legs.
    pub fn into_legs(self) -> Vec<RouteLeg> {
        self.legs
    }
}
