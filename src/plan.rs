//! The seating plan data model: desks, per-room desk maps, and the full
//! multi-room plan.
//!
//! Rendering and export code consumes these types read-only. A room plan
//! serializes as a map keyed by the desk identifier strings `R{row}C{col}`
//! and `E{index}`, each desk carrying its presentation coordinates, both seat
//! slots, and the extra-desk marker.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::room::Room;
use crate::roster::Student;

/// Identifier of a desk within a room.
///
/// The derived ordering is the allocation traversal order: grid desks
/// row-major, `(row, column)` ascending, then extra desks by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeskId {
    /// A desk inside the rectangular grid.
    Grid {
        /// Grid row, starting at 1.
        row: u32,
        /// Grid column, starting at 1.
        col: u32,
    },
    /// A desk outside the grid. Exempt from adjacency.
    Extra {
        /// Extra-desk index, starting at 1.
        index: u32,
    },
}

impl fmt::Display for DeskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeskId::Grid { row, col } => write!(f, "R{row}C{col}"),
            DeskId::Extra { index } => write!(f, "E{index}"),
        }
    }
}

/// Error returned when a desk identifier string does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDeskIdError(String);

impl fmt::Display for ParseDeskIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid desk identifier: {:?}", self.0)
    }
}

impl std::error::Error for ParseDeskIdError {}

impl FromStr for DeskId {
    type Err = ParseDeskIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDeskIdError(s.to_owned());
        if let Some(index) = s.strip_prefix('E') {
            let index = index.parse().map_err(|_| err())?;
            return Ok(DeskId::Extra { index });
        }
        let coords = s.strip_prefix('R').ok_or_else(err)?;
        let (row, col) = coords.split_once('C').ok_or_else(err)?;
        Ok(DeskId::Grid {
            row: row.parse().map_err(|_| err())?,
            col: col.parse().map_err(|_| err())?,
        })
    }
}

impl Serialize for DeskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DeskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// One of the two seat slots on a desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    /// The slot filled first.
    A,
    /// The slot filled second.
    B,
}

impl Seat {
    /// Both slots, in fill order.
    pub const BOTH: [Seat; 2] = [Seat::A, Seat::B];

    /// The other slot on the same desk.
    pub fn other(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::A => write!(f, "seat_a"),
            Seat::B => write!(f, "seat_b"),
        }
    }
}

/// A two-seat desk and its occupants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desk {
    /// Presentation row. Extra desks sit on a virtual row below the grid.
    pub row: u32,
    /// Presentation column.
    pub col: u32,
    /// Occupant of the first seat, if any.
    pub seat_a: Option<Student>,
    /// Occupant of the second seat, if any.
    pub seat_b: Option<Student>,
    /// True for desks outside the adjacency grid.
    pub is_extra: bool,
}

impl Desk {
    fn empty(row: u32, col: u32, is_extra: bool) -> Desk {
        Desk {
            row,
            col,
            seat_a: None,
            seat_b: None,
            is_extra,
        }
    }

    /// Occupant of the given seat slot.
    pub fn seat(&self, seat: Seat) -> Option<&Student> {
        match seat {
            Seat::A => self.seat_a.as_ref(),
            Seat::B => self.seat_b.as_ref(),
        }
    }

    pub(crate) fn seat_mut(&mut self, seat: Seat) -> &mut Option<Student> {
        match seat {
            Seat::A => &mut self.seat_a,
            Seat::B => &mut self.seat_b,
        }
    }

    /// Students currently seated at this desk.
    pub fn occupants(&self) -> impl Iterator<Item = &Student> {
        self.seat_a.iter().chain(self.seat_b.iter())
    }
}

/// All desks of one room, keyed by desk identifier.
///
/// The map order is the allocation traversal order (see [`DeskId`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPlan {
    /// Desk states, grid desks row-major then extra desks.
    pub desks: BTreeMap<DeskId, Desk>,
}

impl RoomPlan {
    /// Materializes every desk of `room` with all seats empty.
    pub fn new(room: &Room) -> RoomPlan {
        let mut desks = BTreeMap::new();
        for row in 1..=room.rows {
            for col in 1..=room.columns {
                desks.insert(DeskId::Grid { row, col }, Desk::empty(row, col, false));
            }
        }
        for index in 1..=room.extra_desks {
            // Virtual presentation row below the grid. Adjacency never reads
            // these coordinates.
            desks.insert(
                DeskId::Extra { index },
                Desk::empty(room.rows + 1, index, true),
            );
        }
        RoomPlan { desks }
    }

    /// Number of students seated in this room.
    pub fn seated_count(&self) -> usize {
        self.desks.values().map(|desk| desk.occupants().count()).sum()
    }

    /// Every student seated in this room, in desk traversal order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.desks.values().flat_map(Desk::occupants)
    }

    /// True when any desk grid-adjacent to `desk_id` seats a student of
    /// `class`. Extra desks are isolated: they have no neighbors and are
    /// nobody's neighbor.
    pub(crate) fn has_same_class_neighbor(&self, class: &str, desk_id: DeskId) -> bool {
        let DeskId::Grid { row, col } = desk_id else {
            return false;
        };
        // Coordinates are 1-based; an id with a 0 coordinate resolves to no
        // desk.
        let neighbors = [
            DeskId::Grid {
                row: row.wrapping_sub(1),
                col,
            },
            DeskId::Grid { row: row + 1, col },
            DeskId::Grid {
                row,
                col: col.wrapping_sub(1),
            },
            DeskId::Grid { row, col: col + 1 },
        ];
        neighbors
            .into_iter()
            .filter_map(|id| self.desks.get(&id))
            .any(|desk| desk.occupants().any(|student| student.class == class))
    }
}

/// The complete per-room, per-desk output of one allocation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingPlan {
    /// Per-room desk maps, keyed by room identifier.
    pub rooms: BTreeMap<String, RoomPlan>,
}

impl SeatingPlan {
    /// Number of students seated across all rooms.
    pub fn seated_count(&self) -> usize {
        self.rooms.values().map(RoomPlan::seated_count).sum()
    }

    /// Every seated student, in room order then desk traversal order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.rooms.values().flat_map(RoomPlan::students)
    }
}
