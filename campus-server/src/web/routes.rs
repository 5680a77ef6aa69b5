//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::description::{DescriptionError, parse_network};
use crate::domain::Network;
use crate::planner::{Planner, RouteError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", post(plan_route_json))
        .route("/route/description", post(plan_route_description))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan a route for a network given as JSON.
async fn plan_route_json(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<NetworkRequest>,
) -> Result<Response, AppError> {
    let network = req.into_network();
    respond(&state, &headers, &network)
}

/// Plan a route for a network given in the text description format.
async fn plan_route_description(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AppError> {
    let network = parse_network(&body)?;
    respond(&state, &headers, &network)
}

fn respond(state: &AppState, headers: &HeaderMap, network: &Network) -> Result<Response, AppError> {
    let route = Planner::new(&state.config).plan(network)?;

    info!(
        lines = network.lines.len(),
        legs = route.legs().len(),
        total_minutes = route.total_duration(),
        "route planned"
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(headers) {
        let template = ItineraryTemplate {
            itinerary: ItineraryView::from_route(&route),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(RouteResponse::from_route(route)).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::Domain(_) => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<DescriptionError> for AppError {
    fn from(e: DescriptionError) -> Self {
        match e {
            DescriptionError::Io { .. } => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
