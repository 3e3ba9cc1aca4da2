//! Error category classification

use super::codes::ErrorCode;

/// Category of an error code, by range
///
/// Only [`ErrorCategory::System`] errors are logged when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 0xxx and unassigned ranges
    General,
    /// 4xxx
    Rsvp,
    /// 7xxx
    Seating,
    /// 9xxx
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code {
            4000..5000 => Self::Rsvp,
            7000..8000 => Self::Seating,
            9000.. => Self::System,
            _ => Self::General,
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
