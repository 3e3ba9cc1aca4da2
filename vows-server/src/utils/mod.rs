//! Utility module
//!
//! - [`AppError`] / [`ApiResponse`] - re-exported from shared::error
//! - Logging setup and request validation helpers

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
