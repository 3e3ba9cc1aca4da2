//! Vows Client - HTTP client and headless seating editors
//!
//! [`NetworkHttpClient`] talks to vows-server over HTTP. The editors in
//! [`editor`] drive a seating partition through any [`SeatingApi`], so
//! they run the same against the network client or a test double.

pub mod config;
pub mod editor;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use editor::{CanvasEditor, EditorError, ListEditor};
pub use error::{ClientError, ClientResult};
pub use http::{NetworkHttpClient, SeatingApi};
pub use session::Session;

// Re-export shared types for convenience
pub use shared::models::{
    CanvasChartResponse, GuestDirectory, ListChartResponse, PositionedTable, RsvpRequest,
    SimpleTable,
};
