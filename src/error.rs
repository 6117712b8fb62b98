//! Error types for malformed allocation inputs.
//!
//! Capacity and constraint exhaustion is never an error: students the
//! allocator cannot legally seat are reported through the unassigned list.
//! Errors are reserved for caller misconfiguration.

use thiserror::Error;

/// Rejected allocation input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Two rooms share the same identifier.
    #[error("duplicate room identifier: {0}")]
    DuplicateRoomId(String),

    /// No rooms were supplied while students await seating.
    #[error("no rooms available for {students} students")]
    NoRooms {
        /// Size of the roster that had nowhere to go.
        students: usize,
    },

    /// Both gender policies were enabled at once. One forces same-gender
    /// desks, the other forces mixed-gender desks.
    #[error("gender separation and boy-girl pairing are mutually exclusive")]
    ConflictingGenderPolicy,
}
