use serde::{Deserialize, Serialize};

use super::status::AccessibilityStatus;

/// Elevator facts, shared by parking structures and multi-level buildings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevatorInfo {
    pub is_available: Option<bool>,
    pub is_spacious_enough: Option<bool>,
    pub has_braille_buttons: Option<bool>,
    pub has_audio_announcements: Option<bool>,
    pub additional_info: Option<String>,
}

impl ElevatorInfo {
    pub fn status(&self) -> AccessibilityStatus {
        match self.is_available {
            None => return AccessibilityStatus::Unknown,
            Some(false) => return AccessibilityStatus::NotAccessible,
            Some(true) => {}
        }

        if self.is_spacious_enough == Some(false)
            || self.has_braille_buttons == Some(false)
            || self.has_audio_announcements == Some(false)
        {
            return AccessibilityStatus::LimitedAccessibility;
        }

        if self.has_braille_buttons.is_none() || self.has_audio_announcements.is_none() {
            return AccessibilityStatus::Unknown;
        }

        match self.is_spacious_enough {
            Some(true) => AccessibilityStatus::FullyAccessible,
            _ => AccessibilityStatus::Unknown,
        }
    }
}
