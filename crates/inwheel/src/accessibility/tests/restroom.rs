use super::common::*;
use crate::accessibility::{AccessibilityStatus, RestroomInfo};

#[test]
fn door_width_gates_everything() {
    let mut restroom = equipped_restroom();
    restroom.door_width = Some(false);
    assert_eq!(restroom.status(), AccessibilityStatus::NotAccessible);

    restroom.door_width = None;
    assert_eq!(restroom.status(), AccessibilityStatus::Unknown);
}

#[test]
fn room_spaciousness_is_returned_when_not_full() {
    for status in [
        AccessibilityStatus::NotAccessible,
        AccessibilityStatus::LimitedAccessibility,
        AccessibilityStatus::Unknown,
    ] {
        let restroom = RestroomInfo {
            room_spaciousness: Some(status),
            ..equipped_restroom()
        };
        assert_eq!(restroom.status(), status);
    }

    let unanswered = RestroomInfo {
        room_spaciousness: None,
        ..equipped_restroom()
    };
    assert_eq!(unanswered.status(), AccessibilityStatus::Unknown);
}

#[test]
fn fully_equipped_restroom_is_accessible() {
    assert_eq!(
        equipped_restroom().status(),
        AccessibilityStatus::FullyAccessible
    );
}

#[test]
fn euro_key_does_not_affect_status() {
    let mut restroom = equipped_restroom();
    restroom.euro_key = Some(false);
    assert_eq!(restroom.status(), AccessibilityStatus::FullyAccessible);
    restroom.euro_key = None;
    assert_eq!(restroom.status(), AccessibilityStatus::FullyAccessible);
}

#[test]
fn all_details_unanswered_is_unknown() {
    let restroom = RestroomInfo {
        door_width: Some(true),
        room_spaciousness: Some(AccessibilityStatus::FullyAccessible),
        ..RestroomInfo::default()
    };
    assert_eq!(restroom.status(), AccessibilityStatus::Unknown);

    let explicit = RestroomInfo {
        grab_rails: Some(AccessibilityStatus::Unknown),
        toilet_seat: Some(AccessibilityStatus::Unknown),
        sink: Some(AccessibilityStatus::Unknown),
        ..restroom
    };
    assert_eq!(explicit.status(), AccessibilityStatus::Unknown);
}

#[test]
fn partial_details_limit_the_restroom() {
    let restroom = RestroomInfo {
        door_width: Some(true),
        room_spaciousness: Some(AccessibilityStatus::FullyAccessible),
        grab_rails: Some(AccessibilityStatus::FullyAccessible),
        ..RestroomInfo::default()
    };
    assert_eq!(restroom.status(), AccessibilityStatus::LimitedAccessibility);

    let missing_alarm = RestroomInfo {
        has_emergency_alarm: Some(false),
        ..equipped_restroom()
    };
    assert_eq!(
        missing_alarm.status(),
        AccessibilityStatus::LimitedAccessibility
    );

    let high_sink = RestroomInfo {
        sink: Some(AccessibilityStatus::NotAccessible),
        ..equipped_restroom()
    };
    assert_eq!(high_sink.status(), AccessibilityStatus::LimitedAccessibility);
}

#[test]
fn toilet_seat_overrides_other_details() {
    for restroom in all_restrooms() {
        let gates_pass = restroom.door_width == Some(true)
            && restroom.room_spaciousness == Some(AccessibilityStatus::FullyAccessible);
        if gates_pass && restroom.toilet_seat == Some(AccessibilityStatus::NotAccessible) {
            assert_eq!(
                restroom.status(),
                AccessibilityStatus::NotAccessible,
                "{restroom:?}"
            );
        }
    }
}
