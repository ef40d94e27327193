use serde::{Deserialize, Serialize};
use std::fmt;

use super::elevator::ElevatorInfo;
use super::status::AccessibilityStatus;

/// Structural kind of a parking facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParkingType {
    Surface,
    Underground,
    MultiStorey,
    Rooftop,
}

impl ParkingType {
    pub const fn label(self) -> &'static str {
        match self {
            ParkingType::Surface => "surface",
            ParkingType::Underground => "underground",
            ParkingType::MultiStorey => "multi_storey",
            ParkingType::Rooftop => "rooftop",
        }
    }

    /// Accepts the spellings seen in OSM and backend rows.
    pub fn from_raw(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "surface" => Some(ParkingType::Surface),
            "underground" => Some(ParkingType::Underground),
            "multi-storey" | "multi_storey" | "multistorey" => Some(ParkingType::MultiStorey),
            "rooftop" => Some(ParkingType::Rooftop),
            _ => None,
        }
    }
}

impl fmt::Display for ParkingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parking facts. Anything that is not surface-level (including an unknown
/// type) is reached through the nested elevator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingInfo {
    pub has_accessible_spots: Option<bool>,
    pub spot_count: Option<u32>,
    pub parking_type: Option<ParkingType>,
    pub has_smooth_surface: Option<bool>,
    pub has_elevator: Option<bool>,
    pub elevator: Option<ElevatorInfo>,
    pub additional_info: Option<String>,
}

impl ParkingInfo {
    pub fn status(&self) -> AccessibilityStatus {
        let spots_unknown = self.has_accessible_spots.is_none() && self.spot_count.is_none();
        if spots_unknown || self.has_smooth_surface.is_none() {
            return AccessibilityStatus::Unknown;
        }

        if self.has_accessible_spots == Some(false) || self.spot_count == Some(0) {
            return AccessibilityStatus::NotAccessible;
        }

        if self.has_smooth_surface == Some(false) {
            return AccessibilityStatus::LimitedAccessibility;
        }

        if self.parking_type != Some(ParkingType::Surface) {
            return self.elevator_access();
        }

        if self.has_accessible_spots == Some(true) || self.spot_count.is_some_and(|count| count > 0)
        {
            return AccessibilityStatus::FullyAccessible;
        }

        AccessibilityStatus::Unknown
    }

    /// An inaccessible elevator only downgrades to limited: accessible spots
    /// may still exist on a reachable level.
    fn elevator_access(&self) -> AccessibilityStatus {
        match self.has_elevator {
            Some(true) => match self.elevator.as_ref().map(ElevatorInfo::status) {
                Some(AccessibilityStatus::FullyAccessible) => AccessibilityStatus::FullyAccessible,
                Some(
                    AccessibilityStatus::LimitedAccessibility | AccessibilityStatus::NotAccessible,
                ) => AccessibilityStatus::LimitedAccessibility,
                Some(AccessibilityStatus::Unknown) | None => AccessibilityStatus::Unknown,
            },
            Some(false) => AccessibilityStatus::NotAccessible,
            None => AccessibilityStatus::Unknown,
        }
    }
}
