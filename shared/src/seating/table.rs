//! Tables, guests and the two chart variants

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::{LIST_TABLE_CAPACITY, PositionedTable, SimpleTable, TABLE_COUNT};

/// Stable synthetic guest identifier
///
/// Assigned at the directory boundary in directory order, so comparing ids
/// compares directory positions. Guests that only exist in persisted seating
/// data get ids after every listed guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuestId(pub u32);

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "guest#{}", self.0)
    }
}

/// A guest known to the partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    /// False for names found only in persisted seating data
    pub listed: bool,
}

/// Role a table plays on the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableRole {
    #[default]
    Guest,
    Bridal,
}

/// Canvas coordinates of a table
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates rounded to the nearest multiple of `grid`
    pub fn snapped(x: f64, y: f64, grid: f64) -> Self {
        Self {
            x: snap_to_grid(x, grid),
            y: snap_to_grid(y, grid),
        }
    }
}

/// Round to the nearest multiple of `grid`, halves rounding up
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    (value / grid + 0.5).floor() * grid
}

/// One table slot in the partition
#[derive(Debug, Clone, PartialEq)]
pub struct Table<E> {
    /// 1-based table number
    pub number: usize,
    pub role: TableRole,
    pub guests: Vec<GuestId>,
    /// Variant-specific data (`()` for list tables, [`Position`] for canvas tables)
    pub extra: E,
}

impl<E> Table<E> {
    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }
}

/// Fixed shape of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub table_count: usize,
    /// Seat limit enforced by guest moves, `None` for unbounded
    pub capacity: Option<usize>,
    /// Table number holding the bridal party, if any
    pub bridal_table: Option<usize>,
}

impl ChartLayout {
    /// List editor: 17 tables of 8
    pub const fn list() -> Self {
        Self {
            table_count: TABLE_COUNT,
            capacity: Some(LIST_TABLE_CAPACITY),
            bridal_table: None,
        }
    }

    /// Canvas editor: 17 unbounded tables, the last one bridal
    pub const fn canvas() -> Self {
        Self {
            table_count: TABLE_COUNT,
            capacity: None,
            bridal_table: Some(TABLE_COUNT),
        }
    }

    pub fn role_of(&self, number: usize) -> TableRole {
        if self.bridal_table == Some(number) {
            TableRole::Bridal
        } else {
            TableRole::Guest
        }
    }
}

/// Persisted table shape of a chart variant
///
/// The partition engine is written once against this trait; each variant
/// supplies its wire shape, its extra per-table data and its layout.
pub trait TableState: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Extra: Clone + fmt::Debug + Default + PartialEq + Send + Sync;

    fn layout() -> ChartLayout;

    fn into_parts(self) -> (Vec<String>, Self::Extra);

    fn from_parts(guests: Vec<String>, extra: &Self::Extra) -> Self;
}

impl TableState for SimpleTable {
    type Extra = ();

    fn layout() -> ChartLayout {
        ChartLayout::list()
    }

    fn into_parts(self) -> (Vec<String>, ()) {
        (self.guests, ())
    }

    fn from_parts(guests: Vec<String>, _extra: &()) -> Self {
        SimpleTable { guests }
    }
}

impl TableState for PositionedTable {
    type Extra = Position;

    fn layout() -> ChartLayout {
        ChartLayout::canvas()
    }

    fn into_parts(self) -> (Vec<String>, Position) {
        (self.guests, Position::new(self.x, self.y))
    }

    fn from_parts(guests: Vec<String>, extra: &Position) -> Self {
        PositionedTable {
            guests,
            x: extra.x,
            y: extra.y,
        }
    }
}

/// Where a guest sits: the unseated pool or a numbered table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Pool,
    /// 1-based table number
    Table(usize),
}

/// Drag-and-drop id of the unseated list
pub const POOL_DROPPABLE_ID: &str = "guest-list";

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Pool => f.write_str(POOL_DROPPABLE_ID),
            Location::Table(n) => write!(f, "table-{n}"),
        }
    }
}

/// Error parsing a droppable id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown drop target: {0}")]
pub struct InvalidLocation(pub String);

impl FromStr for Location {
    type Err = InvalidLocation;

    /// Parses `guest-list` and `table-N`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == POOL_DROPPABLE_ID {
            return Ok(Location::Pool);
        }
        s.strip_prefix("table-")
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .map(Location::Table)
            .ok_or_else(|| InvalidLocation(s.to_string()))
    }
}

/// Decorative canvas marker with no server state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticLayoutObject {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fixed venue furniture drawn on the canvas
pub const STATIC_LAYOUT_OBJECTS: &[StaticLayoutObject] = &[
    StaticLayoutObject { name: "Cake Table", x: 120.0, y: 40.0, width: 160.0, height: 80.0 },
    StaticLayoutObject { name: "DJ Table", x: 60.0, y: 560.0, width: 60.0, height: 200.0 },
    StaticLayoutObject { name: "Pillar", x: 400.0, y: 240.0, width: 60.0, height: 60.0 },
    StaticLayoutObject { name: "Pillar", x: 820.0, y: 240.0, width: 60.0, height: 60.0 },
    StaticLayoutObject { name: "Pillar", x: 400.0, y: 600.0, width: 60.0, height: 60.0 },
    StaticLayoutObject { name: "Pillar", x: 820.0, y: 600.0, width: 60.0, height: 60.0 },
];
