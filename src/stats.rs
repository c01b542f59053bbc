//! Read-side statistics derived from the ledger.
//!
//! Pure functions over ledger data; nothing here mutates or persists state.

use crate::achievements;
use crate::events::{Event, EventCategory};
use crate::ledger::LedgerState;
use chrono::{DateTime, Utc};

/// Points per user level.
const POINTS_PER_LEVEL: i64 = 1000;

/// Sum of values for events recorded on the same UTC calendar day as `now_ts`.
pub fn points_today(events: &[Event], now_ts: i64) -> i64 {
    let today = match DateTime::<Utc>::from_timestamp(now_ts, 0) {
        Some(t) => t.date_naive(),
        None => return 0,
    };
    events
        .iter()
        .filter(|e| {
            DateTime::<Utc>::from_timestamp(e.timestamp, 0).map(|t| t.date_naive()) == Some(today)
        })
        .map(|e| e.value)
        .sum()
}

/// Per-category point totals, in fixed category display order.
pub fn category_totals(events: &[Event]) -> Vec<(EventCategory, i64)> {
    EventCategory::ALL
        .iter()
        .map(|&category| {
            let total = events
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.value)
                .sum();
            (category, total)
        })
        .collect()
}

/// User level derived from lifetime points: one level per 1000 points,
/// starting at level 1.
pub fn level_for_points(total_points: i64) -> i64 {
    total_points / POINTS_PER_LEVEL + 1
}

/// True when the event that brought the ledger to `total_points` (its value
/// being `value`) crossed a multiple of `step`. Used to trigger the point
/// milestone celebration after recording.
pub fn crossed_point_milestone(total_points: i64, value: i64, step: i64) -> bool {
    if step <= 0 || value <= 0 {
        return false;
    }
    total_points % step < value
}

/// Snapshot of overall progress for the profile and share surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub user_name: String,
    pub level: i64,
    pub total_points: i64,
    pub unlocked_achievements: usize,
    pub total_achievements: usize,
    /// Fraction of the catalog unlocked, in [0, 1].
    pub completion: f64,
    pub total_events: usize,
}

impl ProgressSummary {
    pub fn from_ledger(state: &LedgerState) -> Self {
        let total_achievements = achievements::CATALOG.len();
        Self {
            user_name: state.user_name.clone(),
            level: level_for_points(state.total_points),
            total_points: state.total_points,
            unlocked_achievements: state.unlocked_count(),
            total_achievements,
            completion: state.completion(),
            total_events: state.event_count(),
        }
    }

    /// Plain-text rendering handed to the share sheet.
    pub fn share_text(&self) -> String {
        format!(
            "{} - Level {}\nPoints: {}\nAchievements: {}/{}\nCompletion: {}%\nEvents completed: {}",
            self.user_name,
            self.level,
            self.total_points,
            self.unlocked_achievements,
            self.total_achievements,
            // Truncated, not rounded: 13/14 displays as 92%.
            (self.completion * 100.0) as i64,
            self.total_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementId;

    // 2023-11-14 22:13:20 UTC
    const NOW: i64 = 1700000000;

    #[test]
    fn test_points_today_filters_by_utc_day() {
        let events = vec![
            Event::at("Energy saved", EventCategory::Energy, NOW - 60, 30),
            Event::at("Water saved", EventCategory::Water, NOW - 3600, 20),
            // Two days earlier, outside today's window.
            Event::at("System armed", EventCategory::Security, NOW - 2 * 86400, 50),
        ];

        assert_eq!(points_today(&events, NOW), 50);
    }

    #[test]
    fn test_points_today_empty() {
        assert_eq!(points_today(&[], NOW), 0);
    }

    #[test]
    fn test_category_totals_fixed_order() {
        let events = vec![
            Event::at("Energy saved", EventCategory::Energy, NOW, 10),
            Event::at("Solar power boost", EventCategory::Energy, NOW, 15),
            Event::at("Scene activated", EventCategory::Automation, NOW, 40),
        ];

        let totals = category_totals(&events);
        assert_eq!(totals.len(), 5);
        assert_eq!(totals[0], (EventCategory::Energy, 25));
        assert_eq!(totals[1], (EventCategory::Water, 0));
        assert_eq!(totals[4], (EventCategory::Automation, 40));
    }

    #[test]
    fn test_level_for_points() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(999), 1);
        assert_eq!(level_for_points(1000), 2);
        assert_eq!(level_for_points(12500), 13);
    }

    #[test]
    fn test_crossed_point_milestone() {
        // 480 -> 520 crosses 500.
        assert!(crossed_point_milestone(520, 40, 500));
        // 400 -> 440 does not.
        assert!(!crossed_point_milestone(440, 40, 500));
        // Degenerate inputs never celebrate.
        assert!(!crossed_point_milestone(520, 0, 500));
        assert!(!crossed_point_milestone(520, 40, 0));
    }

    #[test]
    fn test_progress_summary() {
        let mut state = LedgerState::default();
        state.user_name = "Alex".to_string();
        state.record_event(Event::at("Energy saved", EventCategory::Energy, NOW, 2300));
        state.unlock(AchievementId::EnergySaver);

        let summary = ProgressSummary::from_ledger(&state);
        assert_eq!(summary.user_name, "Alex");
        assert_eq!(summary.level, 3);
        assert_eq!(summary.total_points, 2300);
        // PointCollector unlocked by recording, EnergySaver explicitly.
        assert_eq!(summary.unlocked_achievements, 2);
        assert_eq!(summary.total_achievements, 14);
        assert_eq!(summary.total_events, 1);

        let text = summary.share_text();
        assert!(text.contains("Alex - Level 3"));
        assert!(text.contains("Achievements: 2/14"));
        assert!(text.contains("Completion: 14%"));
    }

    #[test]
    fn test_share_text_truncates_completion_percentage() {
        // 13/14 is 92.857...% and must display as 92%, not round up to 93%.
        let summary = ProgressSummary {
            user_name: "Alex".to_string(),
            level: 1,
            total_points: 0,
            unlocked_achievements: 13,
            total_achievements: 14,
            completion: 13.0 / 14.0,
            total_events: 0,
        };

        assert!(summary.share_text().contains("Completion: 92%"));
    }
}
