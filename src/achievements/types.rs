//! Achievement system types and data structures.

use serde::{Deserialize, Serialize};

/// Rarity tier of an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All rarities in ascending order.
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    /// Display name for the rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// Unique identifier for each achievement.
///
/// Progress rules and unlock checks are keyed by this id, not by title,
/// so renaming an achievement never changes its behavior. Serializes as a
/// string, which is what the persisted unlocked set stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    FirstSteps,
    EnergySaver,
    WaterGuardian,
    PointCollector,
    SecurityPro,
    ClimateMaster,
    AutomationExpert,
    HomeCommander,
    EfficiencyKing,
    EcoWarrior,
    SmartLiving,
    UltimateMaster,
    LegendaryGuardian,
    InfinityAchievement,
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub rarity: Rarity,
    pub icon: &'static str,
}

/// An achievement rendered for display: the definition plus unlock state and
/// progress toward unlocking. Recomputed on every read, never persisted.
///
/// Invariant: `is_unlocked` implies `progress == 1.0`.
#[derive(Debug, Clone)]
pub struct AchievementView {
    pub def: &'static AchievementDef,
    pub is_unlocked: bool,
    pub progress: f64,
}
