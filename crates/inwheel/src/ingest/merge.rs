use serde_json::{Map, Value};
use tracing::warn;

/// Overlays user-submitted facts on top of source facts.
///
/// Objects merge key by key, recursing into nested objects. A user value
/// replaces the source value only when it is present and not `null`, so a
/// user who answered one question does not erase the rest of the record.
/// A user payload that is not an object is ignored.
pub fn merge_facts(source: &Value, user: &Value) -> Value {
    match (source, user) {
        (_, Value::Null) => source.clone(),
        (Value::Object(source), Value::Object(user)) => Value::Object(merge_objects(source, user)),
        (Value::Null, Value::Object(user)) => Value::Object(merge_objects(&Map::new(), user)),
        (_, Value::Object(_)) => {
            warn!("replacing non-object source facts with user facts");
            strip_nulls(user)
        }
        (_, other) => {
            warn!(kind = json_kind(other), "ignoring non-object user facts");
            source.clone()
        }
    }
}

/// Legacy key spellings, by the path of the object that holds them.
const KEY_ALIASES: &[(&[&str], &str, &str)] = &[
    (&[], "misc", "floor"),
    (&["entrance", "steps"], "lift", "elevator"),
    (&["entrance", "door"], "width", "door_opening"),
    (&["restroom"], "room_maneuver", "room_spaciousness"),
];

/// Rewrites legacy keys to their canonical names so both payloads line up
/// before merging. When a payload carries both spellings the canonical one
/// wins.
pub fn canonicalize_keys(facts: &Value) -> Value {
    let mut facts = facts.clone();
    for (path, alias, canonical) in KEY_ALIASES {
        if let Some(Value::Object(map)) = object_at(&mut facts, path) {
            if let Some(value) = map.remove(*alias) {
                map.entry(*canonical).or_insert(value);
            }
        }
    }
    facts
}

fn object_at<'a>(value: &'a mut Value, path: &[&str]) -> Option<&'a mut Value> {
    path.iter()
        .try_fold(value, |current, key| current.get_mut(*key))
        .filter(|found| found.is_object())
}

fn merge_objects(source: &Map<String, Value>, user: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = source.clone();
    for (key, user_value) in user {
        match (merged.get(key), user_value) {
            (_, Value::Null) => {}
            (Some(Value::Object(existing)), Value::Object(nested)) => {
                let nested = merge_objects(existing, nested);
                merged.insert(key.clone(), Value::Object(nested));
            }
            (_, value) => {
                merged.insert(key.clone(), strip_nulls(value));
            }
        }
    }
    merged
}

fn strip_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key.clone(), strip_nulls(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
