//! Policy flags for the seat allocator.
//!
//! A policy can be created programmatically using [`PlanPolicy::new()`] or by
//! reading environment variables using [`PlanPolicy::from_env()`].
//!
//! # Environment Variables
//!
//! The following environment variables can be used to override policy values.
//! All values are optional, and case-insensitive. Set the value to `"true"`
//! to enable a flag.
//!
//! - `SEATPLAN_RANDOM_ORDER`: shuffle the roster before allocation (default: `true`)
//! - `SEATPLAN_GENDER_SEPARATION`: require desk mates to share a gender tag (default: `false`)
//! - `SEATPLAN_BOY_GIRL_PAIRING`: require desk mates to have differing gender tags (default: `false`)

/// Policy flags for one allocation run.
#[derive(Debug, Clone, Copy)]
pub struct PlanPolicy {
    pub(crate) random_order: bool,
    pub(crate) gender_separation: bool,
    pub(crate) boy_girl_pairing: bool,
}

impl PlanPolicy {
    /// Create a new policy with default parameters.
    ///
    /// By default:
    /// - The roster is shuffled before allocation.
    /// - No gender rule constrains desk mates.
    pub fn new() -> Self {
        Self {
            random_order: true,
            gender_separation: false,
            boy_girl_pairing: false,
        }
    }

    /// Create a policy from environment variables.
    ///
    /// The following environment variables are recognized:
    /// - `SEATPLAN_RANDOM_ORDER`: if set to `"true"`, shuffles the roster (default: `true`)
    /// - `SEATPLAN_GENDER_SEPARATION`: if set to `"true"`, desk mates must share a gender tag (default: `false`)
    /// - `SEATPLAN_BOY_GIRL_PAIRING`: if set to `"true"`, desk mates must have differing gender tags (default: `false`)
    ///
    /// Any other value (including unset) will result in using the default
    /// value for each flag.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        Self {
            random_order: get_env_flag("SEATPLAN_RANDOM_ORDER", true),
            gender_separation: get_env_flag("SEATPLAN_GENDER_SEPARATION", false),
            boy_girl_pairing: get_env_flag("SEATPLAN_BOY_GIRL_PAIRING", false),
        }
    }

    /// Enable or disable roster shuffling.
    ///
    /// With shuffling disabled the input order is preserved and two runs over
    /// identical inputs produce identical plans.
    pub fn with_random_order(mut self, value: bool) -> Self {
        self.random_order = value;
        self
    }

    /// Enable or disable same-gender desks.
    ///
    /// Mutually exclusive with
    /// [`with_boy_girl_pairing`](Self::with_boy_girl_pairing); the allocator
    /// rejects a policy with both flags set.
    pub fn with_gender_separation(mut self, value: bool) -> Self {
        self.gender_separation = value;
        self
    }

    /// Enable or disable mixed-gender desks.
    ///
    /// Mutually exclusive with
    /// [`with_gender_separation`](Self::with_gender_separation); the
    /// allocator rejects a policy with both flags set.
    pub fn with_boy_girl_pairing(mut self, value: bool) -> Self {
        self.boy_girl_pairing = value;
        self
    }
}

impl Default for PlanPolicy {
    fn default() -> Self {
        Self::new()
    }
}
