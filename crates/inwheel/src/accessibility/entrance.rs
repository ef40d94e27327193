use serde::{Deserialize, Serialize};

use super::status::AccessibilityStatus;

/// Level changes at an entrance and the alternatives that bypass them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntranceSteps {
    pub has_stairs: Option<bool>,
    pub step_count: Option<u32>,
    pub ramp: Option<AccessibilityStatus>,
    pub elevator: Option<AccessibilityStatus>,
}

impl EntranceSteps {
    /// Evaluates steps in priority order: no stairs at all, then an elevator,
    /// then a ramp, and finally the raw step count.
    ///
    /// An elevator rated `NotAccessible` does not block the entrance on its
    /// own; evaluation falls through to the ramp and step count.
    pub fn status(&self) -> AccessibilityStatus {
        if self.has_stairs == Some(false) {
            return AccessibilityStatus::FullyAccessible;
        }

        if let Some(status) = self.elevator.and_then(bypass_status) {
            return status;
        }

        if let Some(status) = self.ramp.and_then(bypass_status) {
            return status;
        }

        match self.step_count {
            Some(0) => AccessibilityStatus::FullyAccessible,
            Some(1) => AccessibilityStatus::LimitedAccessibility,
            Some(_) => AccessibilityStatus::NotAccessible,
            None => AccessibilityStatus::Unknown,
        }
    }
}

/// Decisive ratings for a step bypass (elevator or ramp). `NotAccessible`
/// is not decisive so the next alternative gets a say.
fn bypass_status(status: AccessibilityStatus) -> Option<AccessibilityStatus> {
    match status {
        AccessibilityStatus::FullyAccessible
        | AccessibilityStatus::LimitedAccessibility
        | AccessibilityStatus::Unknown => Some(status),
        AccessibilityStatus::NotAccessible => None,
    }
}

/// Door facts for an entrance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntranceDoor {
    /// Width-derived rating of the door opening.
    pub door_opening: Option<AccessibilityStatus>,
    pub automatic_door: Option<bool>,
}

impl EntranceDoor {
    /// Door width acts as a hard filter; only a fully accessible (or
    /// unrated) opening lets the door mechanism decide.
    pub fn status(&self) -> AccessibilityStatus {
        match self.door_opening {
            Some(
                status @ (AccessibilityStatus::NotAccessible
                | AccessibilityStatus::LimitedAccessibility
                | AccessibilityStatus::Unknown),
            ) => status,
            Some(AccessibilityStatus::FullyAccessible) | None => match self.automatic_door {
                Some(true) => AccessibilityStatus::FullyAccessible,
                Some(false) => AccessibilityStatus::LimitedAccessibility,
                None => AccessibilityStatus::Unknown,
            },
        }
    }
}

/// Entrance facts. The entrance gates the status of the whole place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntranceInfo {
    pub steps: Option<EntranceSteps>,
    pub door: Option<EntranceDoor>,
    pub additional_info: Option<String>,
}

impl EntranceInfo {
    pub fn status(&self) -> AccessibilityStatus {
        let steps = self.steps.as_ref().map(EntranceSteps::status);
        let door = self.door.as_ref().map(EntranceDoor::status);
        combine_steps_and_door(steps, door)
    }
}

fn combine_steps_and_door(
    steps: Option<AccessibilityStatus>,
    door: Option<AccessibilityStatus>,
) -> AccessibilityStatus {
    let (Some(steps), Some(door)) = (steps, door) else {
        return AccessibilityStatus::Unknown;
    };

    if steps == AccessibilityStatus::Unknown || door == AccessibilityStatus::Unknown {
        return AccessibilityStatus::Unknown;
    }

    if steps == AccessibilityStatus::NotAccessible || door == AccessibilityStatus::NotAccessible {
        return AccessibilityStatus::NotAccessible;
    }

    steps.more_severe(door)
}
