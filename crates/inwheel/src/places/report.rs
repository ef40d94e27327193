use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::PlaceCategory;
use crate::accessibility::{AccessibilityInfo, AccessibilityStatus};

/// Evaluation result for a single place. Category statuses are `None` when
/// nothing is known about that part of the place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceAccessibilityReport {
    pub place_id: String,
    pub name: String,
    pub category: PlaceCategory,
    pub overall: AccessibilityStatus,
    pub entrance: Option<AccessibilityStatus>,
    pub restroom: Option<AccessibilityStatus>,
    pub parking: Option<AccessibilityStatus>,
    pub floor: Option<AccessibilityStatus>,
    pub has_user_updates: bool,
    pub notes: Vec<String>,
    pub evaluated_at: DateTime<Utc>,
}

impl PlaceAccessibilityReport {
    /// Per-category statuses in display order, skipping unknown categories.
    pub fn categories(&self) -> Vec<(&'static str, AccessibilityStatus)> {
        [
            ("entrance", self.entrance),
            ("restroom", self.restroom),
            ("parking", self.parking),
            ("floor", self.floor),
        ]
        .into_iter()
        .filter_map(|(label, status)| status.map(|status| (label, status)))
        .collect()
    }

    pub fn summary(&self) -> String {
        let headline = format!(
            "{} ({}): {}",
            self.name,
            self.category.label(),
            self.overall.label()
        );

        let shortfalls: Vec<String> = self
            .categories()
            .into_iter()
            .filter(|(_, status)| !status.is_fully_accessible())
            .map(|(label, status)| format!("{label} {status}"))
            .collect();

        if shortfalls.is_empty() {
            headline
        } else {
            format!("{headline}; {}", shortfalls.join(", "))
        }
    }
}

/// Count of places per overall status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTally(BTreeMap<AccessibilityStatus, usize>);

impl StatusTally {
    pub fn record(&mut self, status: AccessibilityStatus) {
        *self.0.entry(status).or_default() += 1;
    }

    pub fn count(&self, status: AccessibilityStatus) -> usize {
        self.0.get(&status).copied().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }
}

impl FromIterator<AccessibilityStatus> for StatusTally {
    fn from_iter<I: IntoIterator<Item = AccessibilityStatus>>(iter: I) -> Self {
        let mut tally = StatusTally::default();
        for status in iter {
            tally.record(status);
        }
        tally
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEvaluation {
    pub reports: Vec<PlaceAccessibilityReport>,
    pub tally: StatusTally,
}

/// Facts derived from OSM tags together with their statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagEvaluation {
    pub facts: AccessibilityInfo,
    pub overall: AccessibilityStatus,
    /// Reading of the place-wide `wheelchair` tag, if one was set.
    pub tagged: Option<AccessibilityStatus>,
    pub entrance: Option<AccessibilityStatus>,
    pub restroom: Option<AccessibilityStatus>,
    pub parking: Option<AccessibilityStatus>,
    pub floor: Option<AccessibilityStatus>,
}

impl TagEvaluation {
    /// The `wheelchair` tag only decides the overall status when the tags
    /// produced no structured facts at all.
    pub fn new(facts: AccessibilityInfo, tagged: Option<AccessibilityStatus>) -> Self {
        let entrance = facts.entrance.as_ref().map(|entrance| entrance.status());
        let restroom = facts.restroom_status();
        let parking = facts.parking_status();
        let floor = facts.floor_status();

        let has_facts = [entrance, restroom, parking, floor]
            .iter()
            .any(Option::is_some);
        let overall = match tagged {
            Some(tagged) if !has_facts => tagged,
            _ => facts.general_status(),
        };

        Self {
            facts,
            overall,
            tagged,
            entrance,
            restroom,
            parking,
            floor,
        }
    }
}
