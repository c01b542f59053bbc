//! Static achievement definitions and progress computation.
//!
//! The catalog is fixed at 14 entries. Declaration order is display order;
//! nothing here sorts by rarity or progress.

use super::types::{AchievementDef, AchievementId, AchievementView, Rarity};
use std::collections::HashSet;

/// All achievement definitions in display order.
pub const CATALOG: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstSteps,
        title: "First Steps",
        description: "Complete 10 events",
        rarity: Rarity::Common,
        icon: "flag.fill",
    },
    AchievementDef {
        id: AchievementId::EnergySaver,
        title: "Energy Saver",
        description: "Save 100 kWh",
        rarity: Rarity::Common,
        icon: "leaf.fill",
    },
    AchievementDef {
        id: AchievementId::WaterGuardian,
        title: "Water Guardian",
        description: "Monitor water 20 times",
        rarity: Rarity::Common,
        icon: "drop.fill",
    },
    AchievementDef {
        id: AchievementId::PointCollector,
        title: "Point Collector",
        description: "Earn 1000 points",
        rarity: Rarity::Rare,
        icon: "star.fill",
    },
    AchievementDef {
        id: AchievementId::SecurityPro,
        title: "Security Pro",
        description: "Check security 30 times",
        rarity: Rarity::Rare,
        icon: "checkmark.shield.fill",
    },
    AchievementDef {
        id: AchievementId::ClimateMaster,
        title: "Climate Master",
        description: "Optimize climate 25 times",
        rarity: Rarity::Rare,
        icon: "sun.max.fill",
    },
    AchievementDef {
        id: AchievementId::AutomationExpert,
        title: "Automation Expert",
        description: "Complete 50 events",
        rarity: Rarity::Rare,
        icon: "cpu.fill",
    },
    AchievementDef {
        id: AchievementId::HomeCommander,
        title: "Home Commander",
        description: "Reach 5000 points",
        rarity: Rarity::Epic,
        icon: "house.fill",
    },
    AchievementDef {
        id: AchievementId::EfficiencyKing,
        title: "Efficiency King",
        description: "100 consecutive days",
        rarity: Rarity::Epic,
        icon: "crown.fill",
    },
    AchievementDef {
        id: AchievementId::EcoWarrior,
        title: "Eco Warrior",
        description: "Save 1000 kWh",
        rarity: Rarity::Epic,
        icon: "globe.americas.fill",
    },
    AchievementDef {
        id: AchievementId::SmartLiving,
        title: "Smart Living",
        description: "Complete all categories",
        rarity: Rarity::Epic,
        icon: "sparkles",
    },
    AchievementDef {
        id: AchievementId::UltimateMaster,
        title: "Ultimate Master",
        description: "Reach 10000 points",
        rarity: Rarity::Legendary,
        icon: "trophy.fill",
    },
    AchievementDef {
        id: AchievementId::LegendaryGuardian,
        title: "Legendary Guardian",
        description: "365 day streak",
        rarity: Rarity::Legendary,
        icon: "flame.fill",
    },
    AchievementDef {
        id: AchievementId::InfinityAchievement,
        title: "Infinity Achievement",
        description: "Unlock all achievements",
        rarity: Rarity::Legendary,
        icon: "infinity",
    },
];

/// Progress toward an achievement as a fraction in [0, 1], independent of
/// whether it is actually unlocked.
///
/// Five achievements have a counter-driven rule; the remaining nine have no
/// automatic progress signal and always report 0.
pub fn evaluate_progress(id: AchievementId, total_points: i64, event_count: usize) -> f64 {
    match id {
        AchievementId::FirstSteps => (event_count as f64 / 10.0).min(1.0),
        AchievementId::PointCollector => (total_points as f64 / 1000.0).min(1.0),
        AchievementId::AutomationExpert => (event_count as f64 / 50.0).min(1.0),
        AchievementId::HomeCommander => (total_points as f64 / 5000.0).min(1.0),
        AchievementId::UltimateMaster => (total_points as f64 / 10000.0).min(1.0),
        _ => 0.0,
    }
}

/// Renders the full catalog for display, in declaration order.
///
/// Membership in `unlocked` overrides the progress rule: an unlocked
/// achievement always reports `progress == 1.0`.
pub fn with_progress(
    unlocked: &HashSet<AchievementId>,
    total_points: i64,
    event_count: usize,
) -> Vec<AchievementView> {
    CATALOG
        .iter()
        .map(|def| {
            if unlocked.contains(&def.id) {
                AchievementView {
                    def,
                    is_unlocked: true,
                    progress: 1.0,
                }
            } else {
                AchievementView {
                    def,
                    is_unlocked: false,
                    progress: evaluate_progress(def.id, total_points, event_count),
                }
            }
        })
        .collect()
}

/// Get the definition for a specific achievement.
pub fn get_def(id: AchievementId) -> Option<&'static AchievementDef> {
    CATALOG.iter().find(|a| a.id == id)
}

/// Get achievements filtered by rarity, in declaration order.
pub fn defs_by_rarity(rarity: Rarity) -> Vec<&'static AchievementDef> {
    CATALOG.iter().filter(|a| a.rarity == rarity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_fourteen_unique_ids() {
        assert_eq!(CATALOG.len(), 14);

        let mut ids = HashSet::new();
        for def in CATALOG {
            assert!(ids.insert(def.id), "Duplicate achievement ID: {:?}", def.id);
        }
    }

    #[test]
    fn test_rarity_distribution() {
        assert_eq!(defs_by_rarity(Rarity::Common).len(), 3);
        assert_eq!(defs_by_rarity(Rarity::Rare).len(), 4);
        assert_eq!(defs_by_rarity(Rarity::Epic).len(), 4);
        assert_eq!(defs_by_rarity(Rarity::Legendary).len(), 3);
    }

    #[test]
    fn test_get_def() {
        let def = get_def(AchievementId::FirstSteps).unwrap();
        assert_eq!(def.title, "First Steps");
        assert_eq!(def.rarity, Rarity::Common);

        let def = get_def(AchievementId::UltimateMaster).unwrap();
        assert_eq!(def.title, "Ultimate Master");
        assert_eq!(def.rarity, Rarity::Legendary);
    }

    #[test]
    fn test_evaluate_progress_rules() {
        assert_eq!(evaluate_progress(AchievementId::FirstSteps, 0, 5), 0.5);
        assert_eq!(evaluate_progress(AchievementId::FirstSteps, 0, 25), 1.0);
        assert_eq!(evaluate_progress(AchievementId::PointCollector, 50, 0), 0.05);
        assert_eq!(evaluate_progress(AchievementId::AutomationExpert, 0, 25), 0.5);
        assert_eq!(evaluate_progress(AchievementId::HomeCommander, 50, 0), 0.01);
        assert_eq!(evaluate_progress(AchievementId::UltimateMaster, 5000, 0), 0.5);
    }

    #[test]
    fn test_evaluate_progress_defaults_to_zero() {
        // No counter-driven rule for these, regardless of the counters.
        for id in [
            AchievementId::EnergySaver,
            AchievementId::WaterGuardian,
            AchievementId::SecurityPro,
            AchievementId::ClimateMaster,
            AchievementId::EfficiencyKing,
            AchievementId::EcoWarrior,
            AchievementId::SmartLiving,
            AchievementId::LegendaryGuardian,
            AchievementId::InfinityAchievement,
        ] {
            assert_eq!(evaluate_progress(id, 1_000_000, 1_000_000), 0.0);
        }
    }

    #[test]
    fn test_with_progress_preserves_catalog_order() {
        let unlocked = HashSet::new();
        let views = with_progress(&unlocked, 0, 0);

        assert_eq!(views.len(), 14);
        for (view, def) in views.iter().zip(CATALOG) {
            assert_eq!(view.def.id, def.id);
        }
    }

    #[test]
    fn test_with_progress_unlocked_forces_full_progress() {
        let mut unlocked = HashSet::new();
        unlocked.insert(AchievementId::EnergySaver);

        // EnergySaver has no progress rule, but the unlocked set wins.
        let views = with_progress(&unlocked, 0, 0);
        let view = views
            .iter()
            .find(|v| v.def.id == AchievementId::EnergySaver)
            .unwrap();
        assert!(view.is_unlocked);
        assert_eq!(view.progress, 1.0);
    }

    #[test]
    fn test_with_progress_is_pure() {
        let mut unlocked = HashSet::new();
        unlocked.insert(AchievementId::FirstSteps);

        let a = with_progress(&unlocked, 777, 23);
        let b = with_progress(&unlocked, 777, 23);

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.def.id, y.def.id);
            assert_eq!(x.is_unlocked, y.is_unlocked);
            assert_eq!(x.progress, y.progress);
        }
    }
}
