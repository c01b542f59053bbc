//! Hearth - smart-home activity ledger and achievement engine.
//!
//! The gamification core behind a smart-home companion app. Point-valued
//! events are recorded into a per-user [`LedgerState`]; a fixed catalog of
//! 14 achievements reports unlock state and progress computed from the
//! ledger's counters. Presentation and the storage technology behind the
//! save file live outside this crate.

pub mod achievements;
pub mod events;
pub mod ledger;
pub mod persistence;
pub mod stats;

pub use achievements::{AchievementDef, AchievementId, AchievementView, Rarity};
pub use events::{Event, EventCategory};
pub use ledger::LedgerState;
