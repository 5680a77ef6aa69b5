//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Route;
use crate::itinerary::{mode_phrase, rounded_total};

/// Itinerary fragment for a planned route.
#[derive(Template)]
#[template(path = "itinerary.html")]
pub struct ItineraryTemplate {
    pub itinerary: ItineraryView,
}

/// Itinerary view model for templates.
#[derive(Debug, Clone)]
pub struct ItineraryView {
    pub total_minutes: i64,
    pub steps: Vec<StepView>,
}

/// One direction in the itinerary.
#[derive(Debug, Clone)]
pub struct StepView {
    pub number: usize,
    pub action: &'static str,
    pub from: String,
    pub to: String,
    pub minutes: String,
    pub is_shuttle: bool,
}

impl ItineraryView {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        let steps = route
            .legs()
            .iter()
            .enumerate()
            .map(|(i, leg)| StepView {
                number: i + 1,
                action: mode_phrase(leg.mode),
                from: leg.from.clone(),
                to: leg.to.clone(),
                minutes: format!("{:.2}", leg.duration_minutes),
                is_shuttle: leg.is_shuttle(),
            })
            .collect();

        Self {
            total_minutes: rounded_total(route),
            steps,
        }
    }
}
