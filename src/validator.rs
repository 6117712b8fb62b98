//! Standalone audit of a produced seating plan.
//!
//! The audit re-checks a finished plan against the same-desk and adjacency
//! rules, independently of how the plan was produced. The allocator's local
//! legality check keeps its own output clean, so on allocator output the scan
//! is expected to come back empty; it exists as a diagnostic for plans of any
//! origin and as the oracle the test suite holds the allocator against.

use std::fmt;

use crate::plan::{DeskId, RoomPlan, Seat, SeatingPlan};

/// A single placement-rule violation found in a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Both seats of one desk hold students of the same class.
    SameDeskClass {
        /// Room containing the desk.
        room_id: String,
        /// The offending desk.
        desk: DeskId,
    },
    /// A seated student's class also occupies a grid-adjacent desk.
    AdjacentClass {
        /// Room containing the desk.
        room_id: String,
        /// The offending desk.
        desk: DeskId,
        /// Seat holding the student.
        seat: Seat,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::SameDeskClass { room_id, desk } => {
                write!(
                    f,
                    "Room {room_id}, Desk {desk}: same class students on same desk"
                )
            }
            Violation::AdjacentClass {
                room_id,
                desk,
                seat,
            } => {
                write!(
                    f,
                    "Room {room_id}, Desk {desk}, {seat}: adjacent same class violation"
                )
            }
        }
    }
}

/// Scans every desk of `plan` and reports all rule violations found.
///
/// An empty result means the plan honors the same-desk and adjacency rules.
/// Gender policy is not audited here: it is a per-run option, not a property
/// a finished plan carries.
pub fn validate_plan(plan: &SeatingPlan) -> Vec<Violation> {
    let mut violations = vec![];
    for (room_id, room_plan) in &plan.rooms {
        violations.append(&mut room_violations(room_id, room_plan));
    }
    violations
}

pub(crate) fn room_violations(room_id: &str, room_plan: &RoomPlan) -> Vec<Violation> {
    let mut violations = vec![];
    for (&desk_id, desk) in &room_plan.desks {
        if let (Some(a), Some(b)) = (&desk.seat_a, &desk.seat_b) {
            if a.class == b.class {
                violations.push(Violation::SameDeskClass {
                    room_id: room_id.to_owned(),
                    desk: desk_id,
                });
            }
        }
        for seat in Seat::BOTH {
            if let Some(student) = desk.seat(seat) {
                if room_plan.has_same_class_neighbor(&student.class, desk_id) {
                    violations.push(Violation::AdjacentClass {
                        room_id: room_id.to_owned(),
                        desk: desk_id,
                        seat,
                    });
                }
            }
        }
    }
    violations
}
