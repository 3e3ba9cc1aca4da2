//! Seating partition engine
//!
//! Keeps every guest in exactly one place: the unseated pool or one of the
//! chart's fixed tables. Both chart variants share the engine through
//! [`TableState`]:
//!
//! | Variant | State | Capacity | Extra |
//! |---------|-------|----------|-------|
//! | list | [`SimpleTable`](crate::models::SimpleTable) | 8 | none |
//! | canvas | [`PositionedTable`](crate::models::PositionedTable) | unbounded | grid-snapped [`Position`] |
//!
//! ```
//! use shared::models::SimpleTable;
//! use shared::seating::{Location, Partition};
//!
//! let names = vec!["Alice".to_string(), "Bob".to_string()];
//! let mut chart = Partition::initialize(&names, vec![SimpleTable::new(vec!["Alice".into()])]);
//! let bob = chart.guest_at(Location::Pool, 0).unwrap();
//! chart.move_guest(bob, Location::Pool, 0, Location::Table(1), 1).unwrap();
//! assert_eq!(chart.names_at(Location::Table(1)).unwrap(), vec!["Alice", "Bob"]);
//! ```

mod error;
mod partition;
mod table;


pub use error::{SeatingError, SeatingResult};
pub use partition::{MoveOutcome, Partition};
pub use table::{
    ChartLayout, Guest, GuestId, InvalidLocation, Location, POOL_DROPPABLE_ID, Position,
    STATIC_LAYOUT_OBJECTS, StaticLayoutObject, Table, TableRole, TableState, snap_to_grid,
};

/// Partition for the list editor
pub type ListPartition = Partition<crate::models::SimpleTable>;

/// Partition for the canvas editor
pub type CanvasPartition = Partition<crate::models::PositionedTable>;
