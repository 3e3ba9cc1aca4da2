//! List editor: tables as drop zones, capacity 8

use shared::seating::{GuestId, ListPartition, Location, MoveOutcome, SeatingError};

use super::{EditorError, SaveOutcome, load_error_message, save_outcome};
use crate::{ClientResult, SeatingApi};

const SAVE_FAILED: &str = "An error occurred while saving the seating chart.";

/// One end of a drag, as reported by the drag-and-drop layer
///
/// `droppable_id` is `guest-list` or `table-N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub droppable_id: String,
    pub index: usize,
}

impl DropTarget {
    pub fn new(location: Location, index: usize) -> Self {
        Self {
            droppable_id: location.to_string(),
            index,
        }
    }
}

/// A finished drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    pub guest: GuestId,
    pub source: DropTarget,
    /// `None` when the guest was dropped outside any drop zone
    pub destination: Option<DropTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped outside any drop zone
    Ignored,
    /// Dropped back where it started
    Unchanged,
    Moved,
    /// Destination table is full; show `alert` to the user
    Rejected { alert: String },
}

/// Drag-and-drop seating editor
pub struct ListEditor<A> {
    api: A,
    chart: Option<ListPartition>,
    load_error: Option<String>,
    saving: bool,
    save_message: Option<String>,
}

impl<A: SeatingApi> ListEditor<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            chart: None,
            load_error: None,
            saving: false,
            save_message: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the guest directory and the saved chart together and rebuild
    /// the partition
    ///
    /// Either fetch failing leaves the editor unloaded.
    pub async fn load(&mut self) -> ClientResult<()> {
        self.chart = None;
        self.load_error = None;

        match tokio::try_join!(self.api.fetch_directory(), self.api.fetch_list_chart()) {
            Ok((directory, layout)) => {
                let chart = ListPartition::initialize(&directory.names, layout.tables);
                let crowded = chart.over_capacity();
                if !crowded.is_empty() {
                    tracing::warn!(tables = ?crowded, "Saved chart has tables over capacity");
                }
                tracing::debug!(
                    guests = chart.guests().len(),
                    unseated = chart.pool().len(),
                    "Seating chart loaded"
                );
                self.chart = Some(chart);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Seating chart load failed");
                self.load_error = Some(load_error_message(&err));
                Err(err)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.chart.is_some()
    }

    pub fn chart(&self) -> Option<&ListPartition> {
        self.chart.as_ref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn save_message(&self) -> Option<&str> {
        self.save_message.as_deref()
    }

    /// Apply a finished drag
    pub fn on_drag_end(&mut self, event: &DropEvent) -> Result<DropOutcome, EditorError> {
        let Some(destination) = &event.destination else {
            return Ok(DropOutcome::Ignored);
        };
        let chart = self.chart.as_mut().ok_or(EditorError::NotLoaded)?;

        let from: Location = event.source.droppable_id.parse()?;
        let to: Location = destination.droppable_id.parse()?;

        match chart.move_guest(event.guest, from, event.source.index, to, destination.index) {
            Ok(MoveOutcome::Moved) => Ok(DropOutcome::Moved),
            Ok(MoveOutcome::Unchanged) => Ok(DropOutcome::Unchanged),
            Err(err @ SeatingError::TableFull { .. }) => {
                tracing::debug!(%err, guest = %event.guest, "Drop rejected");
                Ok(DropOutcome::Rejected {
                    alert: err.to_string(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Send the whole chart to the server
    ///
    /// The partition is never modified, so a failed save can be retried.
    pub async fn save(&mut self) -> Result<SaveOutcome, EditorError> {
        let tables = self.chart.as_ref().ok_or(EditorError::NotLoaded)?.serialize();

        self.saving = true;
        self.save_message = None;
        let result = self.api.save_list_chart(&tables).await;
        self.saving = false;

        let outcome = save_outcome(result, SAVE_FAILED);
        self.save_message = Some(outcome.message.clone());
        Ok(outcome)
    }
}
