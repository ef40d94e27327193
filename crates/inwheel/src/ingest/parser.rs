use tracing::warn;

use crate::accessibility::{AccessibilityStatus, ParkingType};

/// Reads a backend accessibility rating.
///
/// `null` stays absent. Blank text means the rating was never filled in and
/// reads as `Unknown`; any other unrecognized text also reads as `Unknown`
/// and is logged, so a malformed row can only make a place look less
/// accessible than it is.
pub(crate) fn parse_status(field: &'static str, raw: Option<&str>) -> Option<AccessibilityStatus> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return Some(AccessibilityStatus::Unknown);
    }

    match raw.parse::<AccessibilityStatus>() {
        Ok(status) => Some(status),
        Err(err) => {
            warn!(field, value = raw, %err, "falling back to unknown accessibility status");
            Some(AccessibilityStatus::Unknown)
        }
    }
}

pub(crate) fn parse_parking_type(raw: Option<&str>) -> Option<ParkingType> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }

    let parsed = ParkingType::from_raw(raw);
    if parsed.is_none() {
        warn!(value = raw, "ignoring unrecognized parking type");
    }
    parsed
}

/// Counts arrive as JSON integers; negative values are nonsense and dropped.
pub(crate) fn parse_count(field: &'static str, raw: Option<i64>) -> Option<u32> {
    let raw = raw?;
    match u32::try_from(raw) {
        Ok(count) => Some(count),
        Err(_) => {
            warn!(field, value = raw, "ignoring out-of-range count");
            None
        }
    }
}

pub(crate) fn parse_level(raw: Option<i64>) -> Option<i32> {
    let raw = raw?;
    match i32::try_from(raw) {
        Ok(level) => Some(level),
        Err(_) => {
            warn!(value = raw, "ignoring out-of-range floor level");
            None
        }
    }
}
