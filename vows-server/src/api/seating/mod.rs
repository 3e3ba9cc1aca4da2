//! Seating chart API
//!
//! | Path | Method | Chart |
//! |------|--------|-------|
//! | /api/get-seating-chart | GET | list |
//! | /api/save-seating-chart | POST | list |
//! | /api/get-seating-chart-2 | GET | canvas |
//! | /api/save-seating-chart-2 | POST | canvas |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/get-seating-chart", get(handler::get_list_chart))
        .route("/api/save-seating-chart", post(handler::save_list_chart))
        .route("/api/get-seating-chart-2", get(handler::get_canvas_chart))
        .route("/api/save-seating-chart-2", post(handler::save_canvas_chart))
}
