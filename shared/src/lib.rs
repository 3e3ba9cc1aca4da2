//! Shared types for the wedding site
//!
//! Wire models, the unified error system and the seating partition engine,
//! used by both vows-server and vows-client.

pub mod error;
pub mod models;
pub mod seating;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
