//! redb-based storage for the guest directory and seating layouts
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `rsvps` | normalised email | `Rsvp` (JSON) | Guest directory source |
//! | `sequence_counter` | `"rsvp"` | `u64` | Directory order |
//! | `list_seats` | `(table, seat)` | guest name | List chart |
//! | `canvas_seats` | `(table, seat)` | guest name | Canvas chart |
//! | `canvas_positions` | `table` | `(x, y)` | Canvas table placement |
//!
//! Table numbers are 1-based. Seats within a table are stored with their
//! order as the second key component, so a range scan yields each table's
//! guests in seating order.
//!
//! # Saving
//!
//! A chart save replaces the whole chart inside one write transaction. Readers
//! see either the previous chart or the new one, never a mix.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::error::{AppError, ErrorCode};
use shared::models::{PositionedTable, Rsvp, SimpleTable, normalize_email};
use thiserror::Error;

/// RSVP records: key = normalised email, value = JSON-serialized Rsvp
const RSVPS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("rsvps");

/// Counters: key = counter name, value = last issued value
const SEQUENCE_TABLE: TableDefinition<&str, u64> = TableDefinition::new("sequence_counter");

/// List chart seats: key = (table_number, seat_index), value = guest name
const LIST_SEATS_TABLE: TableDefinition<(u32, u32), &str> = TableDefinition::new("list_seats");

/// Canvas chart seats: key = (table_number, seat_index), value = guest name
const CANVAS_SEATS_TABLE: TableDefinition<(u32, u32), &str> = TableDefinition::new("canvas_seats");

/// Canvas table placement: key = table_number, value = (x, y)
const CANVAS_POSITIONS_TABLE: TableDefinition<u32, (f64, f64)> =
    TableDefinition::new("canvas_positions");

const RSVP_SEQUENCE_KEY: &str = "rsvp";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Log the failure and hide it behind a user-facing database error
    pub fn into_app_error(self, message: &str) -> AppError {
        tracing::error!(error = %self, "{}", message);
        AppError::with_message(ErrorCode::DatabaseError, message)
    }
}

/// Guest directory and seating layout storage backed by redb
#[derive(Clone)]
pub struct SeatingStorage {
    db: Arc<Database>,
}

impl SeatingStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            // Create all tables if they don't exist
            let _ = write_txn.open_table(RSVPS_TABLE)?;
            let _ = write_txn.open_table(LIST_SEATS_TABLE)?;
            let _ = write_txn.open_table(CANVAS_SEATS_TABLE)?;
            let _ = write_txn.open_table(CANVAS_POSITIONS_TABLE)?;

            let mut seq_table = write_txn.open_table(SEQUENCE_TABLE)?;
            if seq_table.get(RSVP_SEQUENCE_KEY)?.is_none() {
                seq_table.insert(RSVP_SEQUENCE_KEY, 0u64)?;
            }
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Guest Directory ==========

    /// Insert or update an RSVP keyed on its normalised email
    ///
    /// A re-submission replaces name, meal and submission time but keeps the
    /// original directory position.
    pub fn upsert_rsvp(
        &self,
        name: &str,
        email: &str,
        meal_preference: &str,
        submitted_at: i64,
    ) -> StorageResult<Rsvp> {
        let key = normalize_email(email);
        let txn = self.db.begin_write()?;
        let record = {
            let mut rsvps = txn.open_table(RSVPS_TABLE)?;
            let existing: Option<Rsvp> = rsvps
                .get(key.as_str())?
                .map(|guard| serde_json::from_slice(guard.value()))
                .transpose()?;

            let sequence = match existing {
                Some(previous) => previous.sequence,
                None => {
                    let mut seq_table = txn.open_table(SEQUENCE_TABLE)?;
                    let next = seq_table
                        .get(RSVP_SEQUENCE_KEY)?
                        .map(|guard| guard.value())
                        .unwrap_or(0)
                        + 1;
                    seq_table.insert(RSVP_SEQUENCE_KEY, next)?;
                    next
                }
            };

            let record = Rsvp {
                sequence,
                name: name.to_string(),
                email: key.clone(),
                meal_preference: meal_preference.to_string(),
                submitted_at,
            };
            let bytes = serde_json::to_vec(&record)?;
            rsvps.insert(key.as_str(), bytes.as_slice())?;
            record
        };
        txn.commit()?;

        Ok(record)
    }

    /// All RSVPs in first-submission order
    pub fn list_rsvps(&self) -> StorageResult<Vec<Rsvp>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RSVPS_TABLE)?;

        let mut rsvps = Vec::new();
        for result in table.iter()? {
            let (_, value) = result?;
            let rsvp: Rsvp = serde_json::from_slice(value.value())?;
            rsvps.push(rsvp);
        }
        rsvps.sort_by_key(|r| r.sequence);
        Ok(rsvps)
    }

    /// Guest directory names in first-submission order
    pub fn list_rsvp_names(&self) -> StorageResult<Vec<String>> {
        Ok(self.list_rsvps()?.into_iter().map(|r| r.name).collect())
    }

    // ========== List Chart ==========

    /// Load the list chart as `table_count` tables
    ///
    /// Rows for tables beyond `table_count` are ignored.
    pub fn load_list_chart(&self, table_count: usize) -> StorageResult<Vec<SimpleTable>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(LIST_SEATS_TABLE)?;

        let mut tables = vec![SimpleTable::default(); table_count];
        for result in table.iter()? {
            let (key, value) = result?;
            let (number, _) = key.value();
            if let Some(slot) = slot_mut(&mut tables, number) {
                slot.guests.push(value.value().to_string());
            }
        }
        Ok(tables)
    }

    /// Replace the whole list chart
    pub fn replace_list_chart(&self, tables: &[SimpleTable]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut seats = txn.open_table(LIST_SEATS_TABLE)?;
            seats.retain(|_, _| false)?;
            for (i, t) in tables.iter().enumerate() {
                for (seat, guest) in t.guests.iter().enumerate() {
                    seats.insert((i as u32 + 1, seat as u32), guest.as_str())?;
                }
            }
        }
        txn.commit()?;
        Ok(())
    }

    // ========== Canvas Chart ==========

    /// Load the canvas chart as `table_count` tables
    ///
    /// Tables without a stored position sit at the origin.
    pub fn load_canvas_chart(&self, table_count: usize) -> StorageResult<Vec<PositionedTable>> {
        let read_txn = self.db.begin_read()?;
        let seats = read_txn.open_table(CANVAS_SEATS_TABLE)?;
        let positions = read_txn.open_table(CANVAS_POSITIONS_TABLE)?;

        let mut tables = vec![PositionedTable::default(); table_count];
        for result in positions.iter()? {
            let (key, value) = result?;
            if let Some(slot) = slot_mut(&mut tables, key.value()) {
                (slot.x, slot.y) = value.value();
            }
        }
        for result in seats.iter()? {
            let (key, value) = result?;
            let (number, _) = key.value();
            if let Some(slot) = slot_mut(&mut tables, number) {
                slot.guests.push(value.value().to_string());
            }
        }
        Ok(tables)
    }

    /// Replace the whole canvas chart, positions included
    pub fn replace_canvas_chart(&self, tables: &[PositionedTable]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut seats = txn.open_table(CANVAS_SEATS_TABLE)?;
            let mut positions = txn.open_table(CANVAS_POSITIONS_TABLE)?;
            seats.retain(|_, _| false)?;
            positions.retain(|_, _| false)?;
            for (i, t) in tables.iter().enumerate() {
                let number = i as u32 + 1;
                positions.insert(number, (t.x, t.y))?;
                for (seat, guest) in t.guests.iter().enumerate() {
                    seats.insert((number, seat as u32), guest.as_str())?;
                }
            }
        }
        txn.commit()?;
        Ok(())
    }
}

/// Slot for a 1-based table number, `None` when out of range
fn slot_mut<T>(tables: &mut [T], number: u32) -> Option<&mut T> {
    (number as usize).checked_sub(1).and_then(|i| tables.get_mut(i))
}
