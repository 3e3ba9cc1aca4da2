//! API routes
//!
//! - [`health`] - liveness check
//! - [`access`] - site password gate
//! - [`rsvps`] - RSVP intake and guest directory
//! - [`seating`] - list and canvas seating charts

pub mod access;
pub mod health;
pub mod rsvps;
pub mod seating;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(access::router())
        .merge(rsvps::router())
        .merge(seating::router())
}

/// Build the fully configured application
///
/// Used by both the HTTP server and in-process tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
