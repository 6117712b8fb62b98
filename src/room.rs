//! Examination room geometry.

use serde::{Deserialize, Serialize};

/// Geometry of one examination room.
///
/// A room holds a rectangular grid of `rows x columns` two-seat desks, plus
/// an optional count of extra desks that sit outside the grid and take no
/// part in adjacency. Zero rows or columns are legal and simply contribute no
/// grid desks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub room_id: String,
    /// Number of grid rows.
    pub rows: u32,
    /// Number of grid columns.
    pub columns: u32,
    /// Number of desks outside the adjacency grid.
    #[serde(default)]
    pub extra_desks: u32,
}

impl Room {
    /// Creates a new room geometry.
    pub fn new(room_id: impl Into<String>, rows: u32, columns: u32, extra_desks: u32) -> Room {
        Room {
            room_id: room_id.into(),
            rows,
            columns,
            extra_desks,
        }
    }

    /// Total number of seats in the room: two per desk, grid and extra desks
    /// alike.
    pub fn capacity(&self) -> usize {
        (self.rows as usize * self.columns as usize + self.extra_desks as usize) * 2
    }
}
