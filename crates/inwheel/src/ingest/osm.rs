use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::normalizer::{osm_automatic_door, osm_flag, osm_integer, osm_rating, parse_meters};
use super::parser::{parse_count, parse_level};
use crate::accessibility::{
    AccessibilityInfo, AccessibilityStatus, ElevatorInfo, EntranceDoor, EntranceInfo,
    EntranceSteps, FloorInfo, ParkingInfo, ParkingType, RestroomInfo,
};

/// Surfaces a wheelchair rolls over without trouble.
const SMOOTH_SURFACES: &[&str] = &[
    "asphalt",
    "concrete",
    "paved",
    "paving_stones",
    "concrete:plates",
    "concrete:lanes",
    "bricks",
    "wood",
    "metal",
];

/// Width and depth cut-offs, in metres, used when deriving facts from OSM.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagThresholds {
    pub door_full_width: f64,
    pub door_limited_width: f64,
    pub restroom_door_width: f64,
    pub elevator_min_width: f64,
    pub elevator_min_depth: f64,
}

impl Default for TagThresholds {
    fn default() -> Self {
        Self {
            door_full_width: 0.85,
            door_limited_width: 0.80,
            restroom_door_width: 0.80,
            elevator_min_width: 1.1,
            elevator_min_depth: 1.3,
        }
    }
}

impl TagThresholds {
    pub fn door_status(&self, width: f64) -> AccessibilityStatus {
        if width >= self.door_full_width {
            AccessibilityStatus::FullyAccessible
        } else if width >= self.door_limited_width {
            AccessibilityStatus::LimitedAccessibility
        } else {
            AccessibilityStatus::NotAccessible
        }
    }
}

impl AccessibilityInfo {
    /// Derives source facts from raw OpenStreetMap tags. Sub-records are only
    /// produced when at least one of their tags is present; a floor record
    /// also needs a known level.
    pub fn from_osm_tags(tags: &BTreeMap<String, String>, thresholds: &TagThresholds) -> Self {
        let tags = OsmTags(tags);
        let info = Self {
            entrance: entrance(&tags, thresholds),
            restroom: restroom(&tags, thresholds),
            parking: parking(&tags, thresholds),
            floor: floor(&tags, thresholds),
            additional_info: tags
                .first(&["wheelchair:description", "description"])
                .map(str::to_owned),
        };
        debug!(
            tag_count = tags.0.len(),
            entrance = info.entrance.is_some(),
            restroom = info.restroom.is_some(),
            parking = info.parking.is_some(),
            floor = info.floor.is_some(),
            "derived accessibility facts from osm tags"
        );
        info
    }
}

/// The place-wide `wheelchair` tag, read as a status of its own.
///
/// Absent or blank tags give `None`; values other than the known ratings
/// read as `Unknown`. Only meant as a fallback for places whose tags yield
/// no structured facts.
pub fn wheelchair_tag_status(tags: &BTreeMap<String, String>) -> Option<AccessibilityStatus> {
    let raw = OsmTags(tags).get("wheelchair")?;
    Some(osm_rating(raw).unwrap_or_else(|| {
        debug!(value = raw, "reading unrecognized wheelchair tag as unknown");
        AccessibilityStatus::Unknown
    }))
}

struct OsmTags<'a>(&'a BTreeMap<String, String>);

impl<'a> OsmTags<'a> {
    fn get(&self, key: &str) -> Option<&'a str> {
        self.0
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    fn first(&self, keys: &[&str]) -> Option<&'a str> {
        keys.iter().find_map(|key| self.get(key))
    }

    fn any(&self, keys: &[&str]) -> bool {
        self.first(keys).is_some()
    }

    /// First key whose value parses; unparseable values are logged and skipped.
    fn parsed<T>(&self, keys: &[&str], parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        keys.iter().find_map(|key| {
            let raw = self.get(key)?;
            let parsed = parse(raw);
            if parsed.is_none() {
                debug!(key, value = raw, "skipping unrecognized osm tag value");
            }
            parsed
        })
    }

    fn meters(&self, keys: &[&str]) -> Option<f64> {
        self.parsed(keys, parse_meters)
    }

    fn equals(&self, keys: &[&str], expected: &str) -> Option<bool> {
        self.first(keys)
            .map(|value| value.eq_ignore_ascii_case(expected))
    }
}

const STEP_COUNT_KEYS: &[&str] = &["entrance:step_count", "step_count"];
const RAMP_KEYS: &[&str] = &["ramp:wheelchair", "entrance:ramp", "ramp"];
const ENTRANCE_ELEVATOR_KEYS: &[&str] = &["entrance:elevator", "wheelchair:elevator"];
const DOOR_WIDTH_KEYS: &[&str] = &["door:width", "entrance:width", "entrance:door:width"];
const AUTOMATIC_DOOR_KEYS: &[&str] = &["automatic_door", "entrance:automatic_door"];

fn entrance(tags: &OsmTags<'_>, thresholds: &TagThresholds) -> Option<EntranceInfo> {
    let steps = tags
        .any(&[STEP_COUNT_KEYS, RAMP_KEYS, ENTRANCE_ELEVATOR_KEYS].concat())
        .then(|| {
            let step_count = parse_count(
                "entrance:step_count",
                tags.parsed(STEP_COUNT_KEYS, osm_integer),
            );
            EntranceSteps {
                has_stairs: step_count.map(|count| count > 0),
                step_count,
                ramp: tags.parsed(RAMP_KEYS, osm_rating),
                elevator: tags.parsed(ENTRANCE_ELEVATOR_KEYS, osm_rating),
            }
        });

    let door = tags
        .any(&[DOOR_WIDTH_KEYS, AUTOMATIC_DOOR_KEYS].concat())
        .then(|| EntranceDoor {
            door_opening: Some(
                tags.meters(DOOR_WIDTH_KEYS)
                    .map_or(AccessibilityStatus::Unknown, |width| {
                        thresholds.door_status(width)
                    }),
            ),
            automatic_door: tags.parsed(AUTOMATIC_DOOR_KEYS, osm_automatic_door),
        });

    if steps.is_none() && door.is_none() {
        return None;
    }

    Some(EntranceInfo {
        steps,
        door,
        additional_info: tags.get("entrance:description").map(str::to_owned),
    })
}

const RESTROOM_KEYS: &[&str] = &[
    "toilets:wheelchair",
    "toilets:wheelchair:door_width",
    "toilets:wheelchair:turning_circle",
    "toilets:wheelchair:grab_rails",
    "toilets:centralkey",
    "centralkey",
];

fn restroom(tags: &OsmTags<'_>, thresholds: &TagThresholds) -> Option<RestroomInfo> {
    let dedicated_toilet = tags.get("amenity") == Some("toilets") && tags.any(&["wheelchair"]);
    if !dedicated_toilet && !tags.any(RESTROOM_KEYS) {
        return None;
    }

    Some(RestroomInfo {
        door_width: tags
            .meters(&["toilets:wheelchair:door_width"])
            .map(|width| width >= thresholds.restroom_door_width),
        room_spaciousness: tags.parsed(
            &["toilets:wheelchair:turning_circle", "wheelchair:turning_circle"],
            osm_rating,
        ),
        grab_rails: tags.parsed(&["toilets:wheelchair:grab_rails"], osm_rating),
        toilet_seat: None,
        sink: None,
        has_emergency_alarm: tags.parsed(&["toilets:wheelchair:emergency_alarm"], osm_flag),
        euro_key: tags.equals(&["toilets:centralkey", "centralkey"], "eurokey"),
        additional_info: tags.get("toilets:wheelchair:description").map(str::to_owned),
    })
}

fn parking(tags: &OsmTags<'_>, thresholds: &TagThresholds) -> Option<ParkingInfo> {
    let is_parking = tags.get("amenity") == Some("parking");
    if !is_parking && !tags.any(&["capacity:disabled", "parking_space"]) {
        return None;
    }

    let (has_accessible_spots, spot_count) = accessible_spots(tags);
    let has_elevator = tags.parsed(&["elevator", "parking:elevator"], osm_flag);

    Some(ParkingInfo {
        has_accessible_spots,
        spot_count,
        parking_type: tags.parsed(&["parking"], ParkingType::from_raw),
        has_smooth_surface: tags.get("surface").map(|surface| {
            SMOOTH_SURFACES
                .iter()
                .any(|smooth| surface.eq_ignore_ascii_case(smooth))
        }),
        has_elevator,
        elevator: elevator(tags, thresholds, has_elevator),
        additional_info: tags.get("parking:description").map(str::to_owned),
    })
}

/// `capacity:disabled` is either a count or a yes/no answer;
/// `parking_space=disabled` marks a single dedicated spot.
fn accessible_spots(tags: &OsmTags<'_>) -> (Option<bool>, Option<u32>) {
    let capacity = tags.get("capacity:disabled");
    let count = capacity
        .and_then(osm_integer)
        .and_then(|count| parse_count("capacity:disabled", Some(count)));
    let answer = capacity.and_then(osm_flag);
    let dedicated = tags.equals(&["parking_space"], "disabled") == Some(true);

    let has_spots = match (count, answer) {
        (Some(count), _) => Some(count > 0),
        (None, Some(answer)) => Some(answer),
        (None, None) if dedicated => Some(true),
        (None, None) => None,
    };
    let count = count.or_else(|| dedicated.then_some(1));
    (has_spots, count)
}

fn floor(tags: &OsmTags<'_>, thresholds: &TagThresholds) -> Option<FloorInfo> {
    let level = tags
        .parsed(&["level", "addr:floor"], osm_integer)
        .or_else(|| single_storey(tags).then_some(0));
    let level = parse_level(level)?;
    let has_elevator = tags.parsed(&["elevator", "wheelchair:elevator"], osm_flag);

    Some(FloorInfo {
        level: Some(level),
        has_elevator,
        elevator: elevator(tags, thresholds, has_elevator),
        additional_info: None,
    })
}

/// A building with a single storey has everything at street level.
fn single_storey(tags: &OsmTags<'_>) -> bool {
    tags.parsed(&["building:levels"], osm_integer) == Some(1)
}

fn elevator(
    tags: &OsmTags<'_>,
    thresholds: &TagThresholds,
    has_elevator: Option<bool>,
) -> Option<ElevatorInfo> {
    if has_elevator != Some(true) {
        return None;
    }

    let width = tags.meters(&["elevator:width"]);
    let depth = tags.meters(&["elevator:depth", "elevator:length"]);
    let is_spacious_enough = match (width, depth) {
        (Some(width), Some(depth)) => Some(
            width >= thresholds.elevator_min_width && depth >= thresholds.elevator_min_depth,
        ),
        (Some(width), None) if width < thresholds.elevator_min_width => Some(false),
        (None, Some(depth)) if depth < thresholds.elevator_min_depth => Some(false),
        _ => None,
    };

    Some(ElevatorInfo {
        is_available: tags.parsed(&["elevator:wheelchair"], osm_flag),
        is_spacious_enough,
        has_braille_buttons: tags.parsed(&["elevator:tactile_writing", "tactile_writing"], osm_flag),
        has_audio_announcements: tags.parsed(&["elevator:speech_output", "speech_output"], osm_flag),
        additional_info: None,
    })
}
