//! Web layer for the campus navigator.
//!
//! Provides HTTP endpoints for planning routes from JSON or from the text
//! description format.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
