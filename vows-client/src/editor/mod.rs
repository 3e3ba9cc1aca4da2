//! Headless seating editors
//!
//! Each editor owns one partition for its chart variant and turns UI
//! gestures into partition moves. Loading and saving go through a
//! [`SeatingApi`](crate::SeatingApi); everything else is synchronous.
//!
//! - [`ListEditor`] - drag-and-drop between the unseated list and tables,
//!   8 guests per table
//! - [`CanvasEditor`] - free-form table layout with a per-table modal

mod canvas;
mod list;

#[cfg(test)]
mod tests;

pub use canvas::{CanvasEditor, MODAL_CANDIDATE_LIMIT, SAVE_MESSAGE_TTL, TableModal};
pub use list::{DropEvent, DropOutcome, DropTarget, ListEditor};

use shared::seating::{GuestId, InvalidLocation, SeatingError};
use thiserror::Error;

use crate::{ClientError, ClientResult};

/// Shown when the server rejects a save without a message
const SERVER_ERROR_FALLBACK: &str = "An error occurred.";

/// Editor operation that could not be applied
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Seating chart is not loaded")]
    NotLoaded,

    #[error(transparent)]
    InvalidDroppable(#[from] InvalidLocation),

    #[error(transparent)]
    Seating(#[from] SeatingError),

    #[error("{0} is not in the unseated list")]
    NotUnseated(GuestId),

    #[error("{guest} is not seated at table {number}")]
    NotAtTable { guest: GuestId, number: usize },
}

/// A guest as listed in the sidebar or the table modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestEntry {
    pub id: GuestId,
    pub name: String,
}

/// Result of a save, ready to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
}

fn load_error_message(err: &ClientError) -> String {
    err.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string())
}

/// Server message verbatim when there is one, `transport_fallback` when the
/// request never got an answer
fn save_outcome(result: ClientResult<String>, transport_fallback: &str) -> SaveOutcome {
    match result {
        Ok(message) => SaveOutcome {
            success: true,
            message,
        },
        Err(err) => {
            tracing::warn!(error = %err, "Seating chart save failed");
            let message = if err.is_server_response() {
                err.server_message().unwrap_or(SERVER_ERROR_FALLBACK)
            } else {
                transport_fallback
            };
            SaveOutcome {
                success: false,
                message: message.to_string(),
            }
        }
    }
}
