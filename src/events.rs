//! Smart-home events recorded into the activity ledger.
//!
//! An [`Event`] is one discrete user or smart-home action worth a number of
//! points. Events are created by the caller (the quick-action buttons in the
//! app, or an automation trigger) and owned by the ledger afterwards.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a recorded smart-home action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Energy,
    Water,
    Security,
    Climate,
    Automation,
}

impl EventCategory {
    /// All categories in display order.
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Energy,
        EventCategory::Water,
        EventCategory::Security,
        EventCategory::Climate,
        EventCategory::Automation,
    ];

    /// Display name for the category.
    pub fn name(&self) -> &'static str {
        match self {
            EventCategory::Energy => "Energy",
            EventCategory::Water => "Water",
            EventCategory::Security => "Security",
            EventCategory::Climate => "Climate",
            EventCategory::Automation => "Automation",
        }
    }

    /// Symbol reference rendered next to events of this category.
    pub fn icon(&self) -> &'static str {
        match self {
            EventCategory::Energy => "bolt.fill",
            EventCategory::Water => "drop.fill",
            EventCategory::Security => "lock.shield.fill",
            EventCategory::Climate => "thermometer.sun.fill",
            EventCategory::Automation => "gearshape.2.fill",
        }
    }
}

/// One recorded action contributing points to the ledger.
/// Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub category: EventCategory,
    /// Unix timestamp (seconds) of when the action happened.
    pub timestamp: i64,
    /// Point value. Expected to be non-negative; not validated here.
    pub value: i64,
}

impl Event {
    /// Creates an event stamped with the current time.
    pub fn new(title: impl Into<String>, category: EventCategory, value: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            category,
            timestamp: chrono::Utc::now().timestamp(),
            value,
        }
    }

    /// Creates an event with an explicit timestamp.
    pub fn at(
        title: impl Into<String>,
        category: EventCategory,
        timestamp: i64,
        value: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            category,
            timestamp,
            value,
        }
    }
}

/// Title pool for quick-action events in each category.
fn quick_titles(category: EventCategory) -> &'static [&'static str] {
    match category {
        EventCategory::Energy => &[
            "Optimized lighting",
            "Reduced consumption",
            "Solar power boost",
            "Energy saved",
            "Smart grid activated",
        ],
        EventCategory::Water => &[
            "Water saved",
            "Leak detected",
            "Usage optimized",
            "Filter cleaned",
            "Flow regulated",
        ],
        EventCategory::Security => &[
            "Security check",
            "Access granted",
            "System armed",
            "Intrusion prevented",
            "Camera updated",
        ],
        EventCategory::Climate => &[
            "Temperature adjusted",
            "Air quality improved",
            "Humidity balanced",
            "Ventilation optimized",
            "Climate stabilized",
        ],
        EventCategory::Automation => &[
            "Routine completed",
            "Scene activated",
            "Schedule updated",
            "Task automated",
            "System synced",
        ],
    }
}

/// Generates a quick-action event: a random title from the category's pool
/// and a random point value in 10..=100.
pub fn quick_event<R: Rng>(category: EventCategory, rng: &mut R) -> Event {
    let titles = quick_titles(category);
    let title = titles[rng.gen_range(0..titles.len())];
    let value = rng.gen_range(10..=100);
    Event::new(title, category, value)
}
