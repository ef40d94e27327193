use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How usable a feature or place is for a wheelchair user.
///
/// Variants are declared in ascending order so the derived `Ord` reads as
/// "how much do we know is accessible": `Unknown < NotAccessible <
/// LimitedAccessibility < FullyAccessible`. The ranking used when merging the
/// two halves of an entrance lives in [`AccessibilityStatus::severity`]
/// instead, because `Unknown` has no place on that scale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityStatus {
    #[default]
    Unknown,
    NotAccessible,
    LimitedAccessibility,
    FullyAccessible,
}

impl AccessibilityStatus {
    pub const ALL: [AccessibilityStatus; 4] = [
        AccessibilityStatus::Unknown,
        AccessibilityStatus::NotAccessible,
        AccessibilityStatus::LimitedAccessibility,
        AccessibilityStatus::FullyAccessible,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AccessibilityStatus::Unknown => "unknown",
            AccessibilityStatus::NotAccessible => "not_accessible",
            AccessibilityStatus::LimitedAccessibility => "limited_accessibility",
            AccessibilityStatus::FullyAccessible => "fully_accessible",
        }
    }

    /// Restrictiveness of a known status; higher is more restrictive.
    ///
    /// `Unknown` returns `None`: it propagates through merges rather than
    /// being ranked against known values.
    pub const fn severity(self) -> Option<u8> {
        match self {
            AccessibilityStatus::FullyAccessible => Some(0),
            AccessibilityStatus::LimitedAccessibility => Some(1),
            AccessibilityStatus::NotAccessible => Some(2),
            AccessibilityStatus::Unknown => None,
        }
    }

    /// Returns whichever of the two known statuses is more restrictive.
    /// `Unknown` on either side wins.
    pub fn more_severe(self, other: AccessibilityStatus) -> AccessibilityStatus {
        match (self.severity(), other.severity()) {
            (Some(left), Some(right)) if left >= right => self,
            (Some(_), Some(_)) => other,
            _ => AccessibilityStatus::Unknown,
        }
    }

    pub const fn is_fully_accessible(self) -> bool {
        matches!(self, AccessibilityStatus::FullyAccessible)
    }

    /// Maps a yes/no fact onto the status scale; an absent fact is `Unknown`.
    pub const fn from_flag(flag: Option<bool>) -> AccessibilityStatus {
        match flag {
            Some(true) => AccessibilityStatus::FullyAccessible,
            Some(false) => AccessibilityStatus::NotAccessible,
            None => AccessibilityStatus::Unknown,
        }
    }
}

impl fmt::Display for AccessibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised by [`AccessibilityStatus::from_str`] for text outside the four known labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized accessibility status '{0}'")]
pub struct UnrecognizedStatus(pub String);

impl FromStr for AccessibilityStatus {
    type Err = UnrecognizedStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fully_accessible" => Ok(AccessibilityStatus::FullyAccessible),
            "limited_accessibility" => Ok(AccessibilityStatus::LimitedAccessibility),
            "not_accessible" => Ok(AccessibilityStatus::NotAccessible),
            "unknown" => Ok(AccessibilityStatus::Unknown),
            _ => Err(UnrecognizedStatus(value.to_string())),
        }
    }
}
