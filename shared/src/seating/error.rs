//! Partition engine errors

use thiserror::Error;

use super::table::{GuestId, Location};
use crate::error::{AppError, ErrorCode};

/// Rejected guest or table move
///
/// Every rejection leaves the partition untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    #[error("Table {number} does not exist (chart has {table_count} tables)")]
    TableNotFound { number: usize, table_count: usize },

    #[error("A table can have a maximum of {capacity} guests.")]
    TableFull { number: usize, capacity: usize },

    #[error("Index {index} is out of range for {location}")]
    IndexOutOfRange { location: Location, index: usize },

    #[error("{guest} is not at {location}[{index}]")]
    GuestMismatch {
        guest: GuestId,
        location: Location,
        index: usize,
    },
}

impl SeatingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SeatingError::TableNotFound { .. } => ErrorCode::TableNotFound,
            SeatingError::TableFull { .. } => ErrorCode::TableFull,
            SeatingError::IndexOutOfRange { .. } => ErrorCode::SeatIndexOutOfRange,
            SeatingError::GuestMismatch { .. } => ErrorCode::GuestMismatch,
        }
    }
}

impl From<SeatingError> for AppError {
    fn from(err: SeatingError) -> Self {
        AppError::with_message(err.code(), err.to_string())
    }
}

pub type SeatingResult<T> = Result<T, SeatingError>;
