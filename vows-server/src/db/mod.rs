//! Database layer
//!
//! Embedded redb storage for RSVPs and both seating charts.

pub mod storage;

pub use storage::{SeatingStorage, StorageError, StorageResult};
