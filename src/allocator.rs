//! The seat allocation engine.
//!
//! Allocation is room-major greedy single-pass placement: rooms in the order
//! given, desks in traversal order within each room (grid row-major, then
//! extra desks), `seat_a` before `seat_b`, each seat taking the first student
//! in the working pool that passes the placement-legality check. The fixed
//! traversal order doubles as the tie-break rule for who gets seated when
//! capacity is tight.
//!
//! The legality check is local: it inspects the desk itself and its grid
//! neighbors, nothing else. Since the same check runs for every placement
//! against all occupants already present, no placement can retroactively
//! break an earlier one, and re-scanning the whole grid per candidate would
//! add cost without adding correctness.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, trace, warn};

use crate::error::PlanError;
use crate::plan::{DeskId, RoomPlan, Seat, SeatingPlan};
use crate::policy::PlanPolicy;
use crate::room::Room;
use crate::roster::Student;
use crate::validator;

/// Result of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// The produced seating plan, covering every requested room.
    pub plan: SeatingPlan,
    /// Students left over once every room was processed, in working-pool
    /// order.
    pub unassigned: Vec<Student>,
}

impl Allocation {
    /// Number of students seated across all rooms.
    pub fn seated_count(&self) -> usize {
        self.plan.seated_count()
    }
}

/// The seat allocation engine.
///
/// One instance holds the policy flags; each call to
/// [`allocate`](Self::allocate) is an independent computation over its own
/// inputs, so a hosting service may run several invocations concurrently as
/// long as each gets its own copy of the roster.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatAllocator {
    policy: PlanPolicy,
}

impl SeatAllocator {
    /// Creates an allocator with the given policy.
    pub fn new(policy: PlanPolicy) -> Self {
        Self { policy }
    }

    /// Allocates `students` to `rooms`, drawing from thread-local randomness
    /// when the policy shuffles the roster.
    ///
    /// Running out of legal seats is not an error: the students concerned
    /// come back in [`Allocation::unassigned`] and the plan still covers
    /// every room. `Err` is reserved for malformed input (duplicate room
    /// identifiers, an empty room list for a non-empty roster, conflicting
    /// gender flags).
    pub fn allocate(
        &self,
        students: Vec<Student>,
        rooms: &[Room],
    ) -> Result<Allocation, PlanError> {
        self.allocate_with_rng(students, rooms, &mut rand::thread_rng())
    }

    /// Same as [`allocate`](Self::allocate) with an injected random source,
    /// so a caller can fix a seed and reproduce a run exactly.
    pub fn allocate_with_rng<R: Rng + ?Sized>(
        &self,
        students: Vec<Student>,
        rooms: &[Room],
        rng: &mut R,
    ) -> Result<Allocation, PlanError> {
        self.check_inputs(&students, rooms)?;

        let mut pool = students;
        if self.policy.random_order {
            pool.shuffle(rng);
        }
        let requested = pool.len();

        let mut plan = SeatingPlan::default();
        for room in rooms {
            let mut room_plan = RoomPlan::new(room);
            self.fill_room(&room.room_id, &mut room_plan, &mut pool);
            debug!(
                "room {}: {}/{} seats filled",
                room.room_id,
                room_plan.seated_count(),
                room.capacity()
            );
            plan.rooms.insert(room.room_id.clone(), room_plan);
        }

        if !pool.is_empty() {
            warn!(
                "{} of {requested} students could not be legally seated",
                pool.len()
            );
        }
        info!(
            "seating plan complete: {} seated, {} unassigned",
            plan.seated_count(),
            pool.len()
        );

        Ok(Allocation {
            plan,
            unassigned: pool,
        })
    }

    fn check_inputs(&self, students: &[Student], rooms: &[Room]) -> Result<(), PlanError> {
        if self.policy.gender_separation && self.policy.boy_girl_pairing {
            return Err(PlanError::ConflictingGenderPolicy);
        }
        if rooms.is_empty() && !students.is_empty() {
            return Err(PlanError::NoRooms {
                students: students.len(),
            });
        }
        let mut seen = HashSet::new();
        for room in rooms {
            if !seen.insert(room.room_id.as_str()) {
                return Err(PlanError::DuplicateRoomId(room.room_id.clone()));
            }
        }
        Ok(())
    }

    fn fill_room(&self, room_id: &str, room_plan: &mut RoomPlan, pool: &mut Vec<Student>) {
        let desk_ids: Vec<DeskId> = room_plan.desks.keys().copied().collect();
        for desk_id in desk_ids {
            for seat in Seat::BOTH {
                if pool.is_empty() {
                    return;
                }
                let Some(found) = pool
                    .iter()
                    .position(|student| self.placement_is_legal(student, desk_id, seat, room_plan))
                else {
                    continue;
                };
                let student = pool.remove(found);
                trace!("{room_id} {desk_id} {seat}: {}", student.roll_number);
                *room_plan.desks.get_mut(&desk_id).unwrap().seat_mut(seat) = Some(student);
                debug_assert!(
                    validator::room_violations(room_id, room_plan).is_empty(),
                    "placement broke a seating rule in room {room_id}"
                );
            }
        }
    }

    fn placement_is_legal(
        &self,
        candidate: &Student,
        desk_id: DeskId,
        seat: Seat,
        room_plan: &RoomPlan,
    ) -> bool {
        if let Some(partner) = room_plan.desks[&desk_id].seat(seat.other()) {
            if partner.class == candidate.class {
                return false;
            }
            // Separation before pairing. The flags are mutually exclusive by
            // the input check, so order only matters to readers.
            if self.policy.gender_separation && partner.gender != candidate.gender {
                return false;
            }
            if self.policy.boy_girl_pairing && partner.gender == candidate.gender {
                return false;
            }
        }
        !room_plan.has_same_class_neighbor(&candidate.class, desk_id)
    }
}
