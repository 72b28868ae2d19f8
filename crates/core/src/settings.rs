//! Tunable thresholds for reminders and consumption.

use serde::{Deserialize, Serialize};

/// Heuristic constants shared by the derivations and the update function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Items expiring within this many days (inclusive) are "soon to expire".
    pub expiry_window_days: i64,
    /// Amount removed from an item by a use or cook action.
    pub use_step: u32,
}

impl Settings {
    /// Default expiry window in days.
    pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 5;
    /// Default decrement step.
    pub const DEFAULT_USE_STEP: u32 = 1;
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            expiry_window_days: Self::DEFAULT_EXPIRY_WINDOW_DAYS,
            use_step: Self::DEFAULT_USE_STEP,
        }
    }
}
