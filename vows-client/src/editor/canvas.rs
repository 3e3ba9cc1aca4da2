//! Canvas editor: draggable tables on a grid, guests assigned through a
//! per-table modal

use std::time::Duration;

use shared::seating::{
    CanvasPartition, GuestId, Location, Position, STATIC_LAYOUT_OBJECTS, SeatingError,
    StaticLayoutObject, TableRole,
};

use super::{EditorError, GuestEntry, SaveOutcome, load_error_message, save_outcome};
use crate::{ClientResult, SeatingApi};

const SAVE_FAILED: &str = "An error occurred while saving.";

/// Unseated guests offered in the table modal
pub const MODAL_CANDIDATE_LIMIT: usize = 10;

/// How long the UI keeps a successful save message before calling
/// [`CanvasEditor::clear_save_message`]
pub const SAVE_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Contents of the modal for one table
#[derive(Debug, Clone, PartialEq)]
pub struct TableModal {
    pub number: usize,
    pub role: TableRole,
    pub position: Position,
    pub seated: Vec<GuestEntry>,
    /// First unseated guests in directory order
    pub candidates: Vec<GuestEntry>,
    /// More unseated guests exist than `candidates` shows
    pub truncated: bool,
}

/// Free-form canvas seating editor
pub struct CanvasEditor<A> {
    api: A,
    chart: Option<CanvasPartition>,
    load_error: Option<String>,
    saving: bool,
    save_message: Option<String>,
}

impl<A: SeatingApi> CanvasEditor<A> {
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

    /// Fetch the guest directory and the saved canvas together and rebuild
    /// the partition
    pub async fn load(&mut self) -> ClientResult<()> {
        self.chart = None;
        self.load_error = None;

        match tokio::try_join!(self.api.fetch_directory(), self.api.fetch_canvas_chart()) {
            Ok((directory, layout)) => {
                let chart = CanvasPartition::initialize(&directory.names, layout.tables);
                tracing::debug!(
                    guests = chart.guests().len(),
                    unseated = chart.pool().len(),
                    "Canvas chart loaded"
                );
                self.chart = Some(chart);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Canvas chart load failed");
                self.load_error = Some(load_error_message(&err));
                Err(err)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.chart.is_some()
    }

    pub fn chart(&self) -> Option<&CanvasPartition> {
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

    pub fn clear_save_message(&mut self) {
        self.save_message = None;
    }

    /// Fixed venue furniture drawn behind the tables
    pub fn static_objects(&self) -> &'static [StaticLayoutObject] {
        STATIC_LAYOUT_OBJECTS
    }

    /// Unseated guests whose name contains `query`, ignoring case
    pub fn filter_unseated(&self, query: &str) -> Vec<GuestEntry> {
        let Some(chart) = &self.chart else {
            return Vec::new();
        };
        let needle = query.to_lowercase();
        chart
            .pool()
            .iter()
            .filter(|id| chart.name(**id).to_lowercase().contains(&needle))
            .map(|id| entry(chart, *id))
            .collect()
    }

    pub fn open_table(&self, number: usize) -> Result<TableModal, EditorError> {
        let chart = self.chart.as_ref().ok_or(EditorError::NotLoaded)?;
        let table = chart.table(number).ok_or(SeatingError::TableNotFound {
            number,
            table_count: chart.layout().table_count,
        })?;

        Ok(TableModal {
            number,
            role: table.role,
            position: table.extra,
            seated: table.guests.iter().map(|id| entry(chart, *id)).collect(),
            candidates: chart
                .pool()
                .iter()
                .take(MODAL_CANDIDATE_LIMIT)
                .map(|id| entry(chart, *id))
                .collect(),
            truncated: chart.pool().len() > MODAL_CANDIDATE_LIMIT,
        })
    }

    /// Seat an unseated guest at the end of a table
    pub fn add_guest(&mut self, number: usize, guest: GuestId) -> Result<(), EditorError> {
        let chart = self.chart.as_mut().ok_or(EditorError::NotLoaded)?;
        let from_index = chart
            .pool()
            .iter()
            .position(|id| *id == guest)
            .ok_or(EditorError::NotUnseated(guest))?;
        let to_index = chart.guests_at(Location::Table(number))?.len();

        chart.move_guest(guest, Location::Pool, from_index, Location::Table(number), to_index)?;
        Ok(())
    }

    /// Return a guest to the unseated list at their directory position
    pub fn remove_guest(&mut self, number: usize, guest: GuestId) -> Result<(), EditorError> {
        let chart = self.chart.as_mut().ok_or(EditorError::NotLoaded)?;
        let from_index = chart
            .guests_at(Location::Table(number))?
            .iter()
            .position(|id| *id == guest)
            .ok_or(EditorError::NotAtTable { guest, number })?;
        let to_index = chart.pool_insert_index(guest);

        chart.move_guest(guest, Location::Table(number), from_index, Location::Pool, to_index)?;
        Ok(())
    }

    /// Finish a table drag: apply the drag offset and snap to the grid
    pub fn drag_table_end(
        &mut self,
        number: usize,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<Position, EditorError> {
        let chart = self.chart.as_mut().ok_or(EditorError::NotLoaded)?;
        let current = chart
            .table(number)
            .map(|t| t.extra)
            .ok_or(SeatingError::TableNotFound {
                number,
                table_count: chart.layout().table_count,
            })?;

        Ok(chart.move_table_position(number, current.x + offset_x, current.y + offset_y)?)
    }

    /// Send the whole canvas to the server
    ///
    /// The partition is never modified, so a failed save can be retried.
    pub async fn save(&mut self) -> Result<SaveOutcome, EditorError> {
        let tables = self.chart.as_ref().ok_or(EditorError::NotLoaded)?.serialize();

        self.saving = true;
        self.save_message = None;
        let result = self.api.save_canvas_chart(&tables).await;
        self.saving = false;

        let outcome = save_outcome(result, SAVE_FAILED);
        self.save_message = Some(outcome.message.clone());
        Ok(outcome)
    }
}

fn entry(chart: &CanvasPartition, id: GuestId) -> GuestEntry {
    GuestEntry {
        id,
        name: chart.name(id).to_string(),
    }
}
