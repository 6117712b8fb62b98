//! # Seatplan
//!
//! A modular Rust crate for seating examination candidates across rooms under anti-collusion placement rules.
//!
//! It provides:
//! - Seat allocation over one or more rooms ([`SeatAllocator`](crate::allocator::SeatAllocator))
//! - Placement behavior flags via [`PlanPolicy`](crate::policy::PlanPolicy)
//! - A standalone plan audit ([`validate_plan`](crate::validator::validate_plan))
//!
//! Two students sharing a class designation never share a desk and never sit
//! at grid-adjacent desks. A room is a rectangular grid of two-seat desks
//! plus optional extra desks that sit outside the grid and take no part in
//! adjacency. Students with no legal seat left are returned rather than
//! reported as an error: running out of legal placements is the expected
//! outcome of the domain, not a failure of the run.
//!
//! # Documentation Overview
//!
//! - For the allocation algorithm and its result types, see the [`allocator`] module.
//! - For configuring placement behavior, see [`PlanPolicy`](crate::policy::PlanPolicy).
//! - For the plan data model consumed by rendering and export code, see the [`plan`] module.
//! - For auditing an existing plan, see the [`validator`] module.
//!
//! This crate is the allocation engine only. Roster ingestion, room
//! persistence, and export formats are owned by the surrounding application;
//! the engine consumes plain records and returns plain values.
//!
//! # Usage Example
//!
//! ```
//! use seatplan::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let students = vec![
//!         Student::new("10A001", "John Smith", "10A", "A", "male"),
//!         Student::new("10A002", "Emma Johnson", "10A", "A", "female"),
//!         Student::new("10B001", "Christopher Lee", "10B", "B", "male"),
//!         Student::new("10B002", "Amanda Martinez", "10B", "B", "female"),
//!     ];
//!     let rooms = vec![Room::new("EXAM-HALL-A", 2, 2, 0)];
//!
//!     let policy = PlanPolicy::new().with_random_order(false);
//!     let allocation = SeatAllocator::new(policy).allocate(students, &rooms)?;
//!
//!     for (room_id, room_plan) in &allocation.plan.rooms {
//!         println!("{room_id}: {} students seated", room_plan.seated_count());
//!     }
//!     for student in &allocation.unassigned {
//!         println!("unassigned: {}", student.roll_number);
//!     }
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

pub use anyhow;

pub mod allocator;
pub mod error;
pub mod plan;
pub mod policy;
pub mod room;
pub mod roster;
pub mod validator;

/// Commonly used types and functions for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use seatplan::prelude::*;
/// ```
///
/// Includes:
/// - [`SeatAllocator`](crate::allocator::SeatAllocator) and [`Allocation`](crate::allocator::Allocation)
/// - [`PlanPolicy`](crate::policy::PlanPolicy)
/// - the plan data model and [`validate_plan`](crate::validator::validate_plan)
pub mod prelude {
    pub use crate::allocator::{Allocation, SeatAllocator};
    pub use crate::error::PlanError;
    pub use crate::plan::{Desk, DeskId, RoomPlan, Seat, SeatingPlan};
    pub use crate::policy::PlanPolicy;
    pub use crate::room::Room;
    pub use crate::roster::{filter_classes, Student};
    pub use crate::validator::{validate_plan, Violation};
}
