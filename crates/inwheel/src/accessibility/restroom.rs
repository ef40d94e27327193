use serde::{Deserialize, Serialize};

use super::status::AccessibilityStatus;

/// Restroom facts.
///
/// Door width and room spaciousness gate the evaluation; the remaining
/// details only decide between limited and full accessibility, except for the
/// toilet seat which can block on its own. `euro_key` and `additional_info`
/// are informational and never scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestroomInfo {
    pub door_width: Option<bool>,
    pub room_spaciousness: Option<AccessibilityStatus>,
    pub grab_rails: Option<AccessibilityStatus>,
    pub toilet_seat: Option<AccessibilityStatus>,
    pub sink: Option<AccessibilityStatus>,
    pub has_emergency_alarm: Option<bool>,
    pub euro_key: Option<bool>,
    pub additional_info: Option<String>,
}

impl RestroomInfo {
    pub fn status(&self) -> AccessibilityStatus {
        let door = AccessibilityStatus::from_flag(self.door_width);
        if !door.is_fully_accessible() {
            return door;
        }

        let room = self.room_spaciousness.unwrap_or_default();
        if !room.is_fully_accessible() {
            return room;
        }

        self.detail_status()
    }

    fn detail_status(&self) -> AccessibilityStatus {
        let toilet_seat = self.toilet_seat.unwrap_or_default();
        let details = [
            self.grab_rails.unwrap_or_default(),
            self.sink.unwrap_or_default(),
            toilet_seat,
            AccessibilityStatus::from_flag(self.has_emergency_alarm),
        ];

        if details
            .iter()
            .all(|status| *status == AccessibilityStatus::Unknown)
        {
            return AccessibilityStatus::Unknown;
        }

        if toilet_seat == AccessibilityStatus::NotAccessible {
            return AccessibilityStatus::NotAccessible;
        }

        if details.iter().any(|status| !status.is_fully_accessible()) {
            return AccessibilityStatus::LimitedAccessibility;
        }

        AccessibilityStatus::FullyAccessible
    }
}
