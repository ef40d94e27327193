use serde::{Deserialize, Serialize};

use super::elevator::ElevatorInfo;
use super::status::AccessibilityStatus;

/// Which floor the place is on and how to get there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorInfo {
    /// Floor relative to street level; `0` needs no vertical access.
    pub level: Option<i32>,
    pub has_elevator: Option<bool>,
    pub elevator: Option<ElevatorInfo>,
    pub additional_info: Option<String>,
}

impl FloorInfo {
    pub fn status(&self) -> AccessibilityStatus {
        match (self.level, self.has_elevator, self.elevator.as_ref()) {
            (Some(0), _, _) => AccessibilityStatus::FullyAccessible,
            (None, _, _) => AccessibilityStatus::Unknown,
            (Some(_), Some(false), _) => AccessibilityStatus::NotAccessible,
            (Some(_), Some(true), Some(elevator)) => elevator.status(),
            (Some(_), Some(true), None) | (Some(_), None, _) => AccessibilityStatus::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn working_elevator() -> ElevatorInfo {
        ElevatorInfo {
            is_available: Some(true),
            is_spacious_enough: Some(true),
            has_braille_buttons: Some(true),
            has_audio_announcements: Some(true),
            additional_info: None,
        }
    }

    #[test]
    fn street_level_needs_nothing_else() {
        let floor = FloorInfo {
            level: Some(0),
            has_elevator: Some(false),
            ..FloorInfo::default()
        };
        assert_eq!(floor.status(), AccessibilityStatus::FullyAccessible);
    }

    #[test]
    fn missing_level_is_unknown() {
        let floor = FloorInfo {
            has_elevator: Some(true),
            elevator: Some(working_elevator()),
            ..FloorInfo::default()
        };
        assert_eq!(floor.status(), AccessibilityStatus::Unknown);
    }

    #[test]
    fn upper_floor_follows_elevator() {
        let mut floor = FloorInfo {
            level: Some(2),
            has_elevator: Some(false),
            ..FloorInfo::default()
        };
        assert_eq!(floor.status(), AccessibilityStatus::NotAccessible);

        floor.has_elevator = Some(true);
        assert_eq!(floor.status(), AccessibilityStatus::Unknown);

        floor.elevator = Some(working_elevator());
        assert_eq!(floor.status(), AccessibilityStatus::FullyAccessible);

        floor.has_elevator = None;
        assert_eq!(floor.status(), AccessibilityStatus::Unknown);
    }

    #[test]
    fn basement_levels_are_not_street_level() {
        let floor = FloorInfo {
            level: Some(-1),
            has_elevator: Some(false),
            ..FloorInfo::default()
        };
        assert_eq!(floor.status(), AccessibilityStatus::NotAccessible);
    }
}
