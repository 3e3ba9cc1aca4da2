//! Seating chart wire shapes
//!
//! Two chart variants share one engine:
//!
//! | Variant | Table shape | Fetch extras |
//! |---------|-------------|--------------|
//! | list (A) | `["Alice", "Bob"]` | `seatedGuests` |
//! | canvas (B) | `{"guests": [...], "x": 0, "y": 0}` | `names` (unseated) |

use serde::{Deserialize, Serialize};

/// Number of tables in both chart variants
pub const TABLE_COUNT: usize = 17;

/// Seats per table in the list variant
pub const LIST_TABLE_CAPACITY: usize = 8;

/// Canvas grid size used for table snapping
pub const GRID_SNAP: f64 = 40.0;

/// List-variant table: an ordered guest-name list, serialized as a bare array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimpleTable {
    pub guests: Vec<String>,
}

impl SimpleTable {
    pub fn new(guests: Vec<String>) -> Self {
        Self { guests }
    }
}

impl From<Vec<String>> for SimpleTable {
    fn from(guests: Vec<String>) -> Self {
        Self { guests }
    }
}

/// Canvas-variant table: guest list plus its position on the planning canvas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionedTable {
    #[serde(default)]
    pub guests: Vec<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// GET /api/get-seating-chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListChartResponse {
    pub tables: Vec<SimpleTable>,
    pub seated_guests: Vec<String>,
}

/// GET /api/get-seating-chart-2
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasChartResponse {
    pub tables: Vec<PositionedTable>,
    /// Unseated guests, directory order
    pub names: Vec<String>,
}

/// POST body for both save endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveChartRequest<T> {
    pub tables: Vec<T>,
}

/// Message returned by a successful save
pub const SAVE_SUCCESS_MESSAGE: &str = "Seating chart saved successfully!";
