//! The persisted ledger aggregate.

use crate::achievements::AchievementId;
use crate::events::Event;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-user activity state: recorded events, accumulated points, and the set
/// of unlocked achievements. Saved to disk after every mutation.
///
/// Invariants maintained by the mutation methods in `ledger::logic`:
/// - `total_points` equals the sum of event values, clamped at 0 after deletes.
/// - Ids never leave `unlocked` except through a full reset.
/// - `events` is insertion-ordered, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerState {
    pub user_name: String,
    pub user_photo: Option<Vec<u8>>,
    /// Recorded events, newest first.
    pub events: Vec<Event>,
    pub total_points: i64,
    pub unlocked: HashSet<AchievementId>,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            user_name: "User".to_string(),
            user_photo: None,
            events: Vec::new(),
            total_points: 0,
            unlocked: HashSet::new(),
        }
    }
}
