//! Error codes for the wedding site
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 4xxx: RSVP errors
//! - 7xxx: Seating chart errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code carried in every error body
///
/// Serialized as its u16 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    Success = 0,
    /// Request body passed extraction but failed field validation
    ValidationFailed = 2,
    /// Request body could not be read
    InvalidRequest = 5,

    // ==================== 4xxx: RSVP ====================
    /// Name, email or meal missing
    RsvpMissingFields = 4001,
    /// Email address is malformed
    RsvpInvalidEmail = 4002,

    // ==================== 7xxx: Seating ====================
    /// Table number outside the chart
    TableNotFound = 7001,
    /// Destination table is at capacity
    TableFull = 7002,
    /// Seat or pool index outside the list
    SeatIndexOutOfRange = 7003,
    /// Guest at the source index is not the one being moved
    GuestMismatch = 7004,
    /// Save payload has no usable `tables` field
    InvalidTablesPayload = 7005,

    // ==================== 9xxx: System ====================
    DatabaseError = 9002,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default user-facing message
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "OK",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RsvpMissingFields => "Missing required fields.",
            ErrorCode::RsvpInvalidEmail => "Invalid email address.",
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableFull => "A table can have a maximum of 8 guests.",
            ErrorCode::SeatIndexOutOfRange => "Seat index is out of range",
            ErrorCode::GuestMismatch => "Guest is not at the given position",
            ErrorCode::InvalidTablesPayload => "Missing or invalid tables data.",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A u16 that names no [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            2 => ErrorCode::ValidationFailed,
            5 => ErrorCode::InvalidRequest,
            4001 => ErrorCode::RsvpMissingFields,
            4002 => ErrorCode::RsvpInvalidEmail,
            7001 => ErrorCode::TableNotFound,
            7002 => ErrorCode::TableFull,
            7003 => ErrorCode::SeatIndexOutOfRange,
            7004 => ErrorCode::GuestMismatch,
            7005 => ErrorCode::InvalidTablesPayload,
            9002 => ErrorCode::DatabaseError,
            _ => return Err(InvalidErrorCode(value)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
