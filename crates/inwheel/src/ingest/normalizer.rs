use crate::accessibility::AccessibilityStatus;

/// Reads an OSM length in metres.
///
/// Accepts `"90 cm"`, `"0,9"`, `"1.1 m"` and bare numbers. A bare number
/// above 10 is taken to be centimetres.
pub(crate) fn parse_meters(raw: &str) -> Option<f64> {
    let lowered = raw.trim().to_ascii_lowercase();
    let digits: String = lowered
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == ',')
        .map(|ch| if ch == ',' { '.' } else { ch })
        .collect();
    let value = digits.parse::<f64>().ok()?;

    if lowered.contains("cm") {
        Some(value / 100.0)
    } else if lowered.contains('m') {
        Some(value)
    } else if value > 10.0 {
        Some(value / 100.0)
    } else {
        Some(value)
    }
}

/// Maps OSM `wheelchair`-style values onto a rating. Returns `None` for
/// values that say nothing about accessibility.
pub(crate) fn osm_rating(raw: &str) -> Option<AccessibilityStatus> {
    match normalize_value(raw).as_str() {
        "yes" | "wheelchair" | "designated" => Some(AccessibilityStatus::FullyAccessible),
        "limited" => Some(AccessibilityStatus::LimitedAccessibility),
        "no" => Some(AccessibilityStatus::NotAccessible),
        "unknown" => Some(AccessibilityStatus::Unknown),
        _ => None,
    }
}

pub(crate) fn osm_flag(raw: &str) -> Option<bool> {
    match normalize_value(raw).as_str() {
        "yes" | "true" | "1" => Some(true),
        "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

pub(crate) fn osm_automatic_door(raw: &str) -> Option<bool> {
    match normalize_value(raw).as_str() {
        "yes" | "button" | "motion" | "continuous" | "slowdown_button" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Integer tags such as `level` may carry ranges (`"0;1"`, `"1-2"`); the
/// first value wins.
pub(crate) fn osm_integer(raw: &str) -> Option<i64> {
    let first = raw.split([';', ',']).next()?.trim();
    let first = match first.get(1..).and_then(|rest| rest.find('-')) {
        Some(dash) => &first[..=dash],
        None => first,
    };
    first.parse::<i64>().ok()
}

fn normalize_value(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}
