use serde_json::{json, Value};

use super::common::*;
use crate::accessibility::AccessibilityStatus;
use crate::ingest::IngestError;
use crate::places::{PlaceCategory, PlaceEvaluator};

#[test]
fn step_free_automatic_entrance_is_fully_accessible() {
    let report = PlaceEvaluator::default().evaluate(&accessible_place("p1"));

    assert_eq!(report.place_id, "p1");
    assert_eq!(report.category, PlaceCategory::Cafe);
    assert_eq!(report.overall, AccessibilityStatus::FullyAccessible);
    assert_eq!(report.entrance, Some(AccessibilityStatus::FullyAccessible));
    assert_eq!(report.restroom, None);
    assert_eq!(report.summary(), "Place p1 (cafe): fully_accessible");
    assert!(report.notes.is_empty());
}

#[test]
fn stepped_entrance_gates_the_whole_place() {
    let place = place(
        "p2",
        json!({
            "entrance": {
                "steps": {"has_stairs": true, "step_count": 4},
                "door": {"door_opening": "fully_accessible", "automatic_door": true}
            },
            "restroom": {
                "door_width": true,
                "room_spaciousness": "fully_accessible",
                "grab_rails": "fully_accessible",
                "toilet_seat": "fully_accessible",
                "sink": "fully_accessible",
                "has_emergency_alarm": true
            }
        }),
        Value::Null,
    );

    let report = PlaceEvaluator::default().evaluate(&place);

    assert_eq!(report.overall, AccessibilityStatus::NotAccessible);
    assert_eq!(report.restroom, Some(AccessibilityStatus::FullyAccessible));
    assert_eq!(
        report.summary(),
        "Place p2 (cafe): not_accessible; entrance not_accessible"
    );
}

#[test]
fn user_ramp_rescues_a_stepped_entrance() {
    let place = place(
        "p3",
        json!({"entrance": {
            "steps": {"has_stairs": true, "step_count": 4},
            "door": {"door_opening": "fully_accessible", "automatic_door": true}
        }}),
        json!({"entrance": {"steps": {"ramp": "fully_accessible"}}}),
    );

    let report = PlaceEvaluator::default().evaluate(&place);

    assert_eq!(report.overall, AccessibilityStatus::FullyAccessible);
}

#[test]
fn limited_restroom_limits_an_accessible_place() {
    let place = place(
        "p4",
        json!({
            "entrance": {
                "steps": {"has_stairs": false},
                "door": {"door_opening": "fully_accessible", "automatic_door": true}
            },
            "restroom": {"door_width": true, "room_spaciousness": "fully_accessible",
                         "grab_rails": "not_accessible", "sink": "fully_accessible"}
        }),
        Value::Null,
    );

    let report = PlaceEvaluator::default().evaluate(&place);

    assert_eq!(report.overall, AccessibilityStatus::LimitedAccessibility);
    assert_eq!(
        report.summary(),
        "Place p4 (cafe): limited_accessibility; restroom limited_accessibility"
    );
}

#[test]
fn malformed_facts_degrade_to_unknown_with_a_note() {
    let place = place("p5", json!({"entrance": 42}), Value::Null);

    let report = PlaceEvaluator::default().evaluate(&place);

    assert_eq!(report.overall, AccessibilityStatus::Unknown);
    assert_eq!(report.entrance, None);
    assert!(report
        .notes
        .iter()
        .any(|note| note.contains("facts for place p5 are malformed")));
}

#[test]
fn unrecognized_ratings_read_as_unknown() {
    let place = place(
        "p6",
        json!({"entrance": {
            "steps": {"has_stairs": false},
            "door": {"door_opening": "quite wide", "automatic_door": true}
        }}),
        Value::Null,
    );

    let report = PlaceEvaluator::default().evaluate(&place);

    assert_eq!(report.entrance, Some(AccessibilityStatus::Unknown));
    assert_eq!(report.overall, AccessibilityStatus::Unknown);
}

#[test]
fn batch_tallies_overall_statuses() {
    let places = vec![
        accessible_place("a"),
        accessible_place("b"),
        stepped_place("c"),
        place("d", Value::Null, Value::Null),
    ];

    let batch = PlaceEvaluator::default()
        .evaluate_batch(&places)
        .expect("batch within limit");

    assert_eq!(batch.reports.len(), 4);
    assert_eq!(batch.tally.count(AccessibilityStatus::FullyAccessible), 2);
    assert_eq!(batch.tally.count(AccessibilityStatus::NotAccessible), 1);
    assert_eq!(batch.tally.count(AccessibilityStatus::Unknown), 1);
    assert_eq!(batch.tally.count(AccessibilityStatus::LimitedAccessibility), 0);
    assert_eq!(batch.tally.total(), 4);
}

#[test]
fn oversized_batches_are_rejected() {
    let places = vec![accessible_place("a"), accessible_place("b")];

    let err = evaluator_with_limit(1)
        .evaluate_batch(&places)
        .expect_err("batch above limit");

    assert!(matches!(
        err,
        IngestError::BatchTooLarge { size: 2, limit: 1 }
    ));
}

#[test]
fn user_updates_are_flagged() {
    let mut place = accessible_place("p7");
    assert!(!PlaceEvaluator::default().evaluate(&place).has_user_updates);

    place.last_user_update = Some(
        chrono::DateTime::parse_from_rfc3339("2024-04-01T10:00:00Z")
            .expect("timestamp")
            .with_timezone(&chrono::Utc),
    );
    assert!(PlaceEvaluator::default().evaluate(&place).has_user_updates);
}
