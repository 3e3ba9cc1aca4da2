//! Data models
//!
//! Shared between vows-server and vows-client (via API).

pub mod guest;
pub mod seating;

// Re-exports
pub use guest::*;
pub use seating::*;
