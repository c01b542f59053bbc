//! Achievement catalog and progress computation.
//!
//! A fixed catalog of 14 achievement definitions, plus pure functions that
//! compute unlock state and progress from the ledger's counters. Nothing in
//! this module mutates state; unlocking lives in the ledger.

pub mod data;
pub mod types;

pub use data::{defs_by_rarity, evaluate_progress, get_def, with_progress, CATALOG};
pub use types::{AchievementDef, AchievementId, AchievementView, Rarity};
