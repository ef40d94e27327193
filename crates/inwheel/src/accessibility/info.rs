use serde::{Deserialize, Serialize};

use super::entrance::EntranceInfo;
use super::floor::FloorInfo;
use super::parking::ParkingInfo;
use super::restroom::RestroomInfo;
use super::status::AccessibilityStatus;

/// Every accessibility fact known about a place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityInfo {
    pub entrance: Option<EntranceInfo>,
    pub restroom: Option<RestroomInfo>,
    pub parking: Option<ParkingInfo>,
    pub floor: Option<FloorInfo>,
    pub additional_info: Option<String>,
}

impl AccessibilityInfo {
    /// Place-level status.
    ///
    /// The entrance is a hard gate: if it is not fully accessible its status
    /// is the answer. Past the gate, any limitation in the restroom, floor or
    /// parking makes the place limited, and any unknown keeps it unknown.
    /// Missing sub-records are not held against the place.
    pub fn general_status(&self) -> AccessibilityStatus {
        let entrance = self.entrance_status();
        if !entrance.is_fully_accessible() {
            return entrance;
        }

        let statuses = [
            self.restroom_status(),
            self.floor_status(),
            self.parking_status(),
        ];
        let present = || statuses.iter().flatten();

        if present().any(|status| {
            matches!(
                status,
                AccessibilityStatus::NotAccessible | AccessibilityStatus::LimitedAccessibility
            )
        }) {
            return AccessibilityStatus::LimitedAccessibility;
        }

        if present().any(|status| *status == AccessibilityStatus::Unknown) {
            return AccessibilityStatus::Unknown;
        }

        AccessibilityStatus::FullyAccessible
    }

    pub fn entrance_status(&self) -> AccessibilityStatus {
        self.entrance
            .as_ref()
            .map(EntranceInfo::status)
            .unwrap_or_default()
    }

    pub fn restroom_status(&self) -> Option<AccessibilityStatus> {
        self.restroom.as_ref().map(RestroomInfo::status)
    }

    pub fn parking_status(&self) -> Option<AccessibilityStatus> {
        self.parking.as_ref().map(ParkingInfo::status)
    }

    pub fn floor_status(&self) -> Option<AccessibilityStatus> {
        self.floor.as_ref().map(FloorInfo::status)
    }
}
