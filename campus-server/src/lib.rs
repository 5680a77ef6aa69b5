//! Campus navigator.
//!
//! Finds the fastest way across a campus on foot and by shuttle cart:
//! "I'm here, I need to be there; when should I walk and when should I ride?"

pub mod config;
pub mod description;
pub mod domain;
pub mod geometry;
pub mod itinerary;
pub mod logging;
pub mod planner;
pub mod web;
