//! RSVP and guest directory API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/rsvp", post(handler::submit))
        .route("/api/get-rsvps", get(handler::directory))
}
