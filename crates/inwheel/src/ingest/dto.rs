use serde::Deserialize;

use super::parser::{parse_count, parse_level, parse_parking_type, parse_status};
use crate::accessibility::{
    AccessibilityInfo, ElevatorInfo, EntranceDoor, EntranceInfo, EntranceSteps, FloorInfo,
    ParkingInfo, RestroomInfo,
};

/// Accessibility facts as stored by the backend: ratings are free text and
/// counts are plain integers. Decoding never fails on a bad rating; see
/// [`parse_status`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AccessibilityDto {
    entrance: Option<EntranceDto>,
    restroom: Option<RestroomDto>,
    parking: Option<ParkingDto>,
    #[serde(alias = "misc")]
    floor: Option<FloorDto>,
    additional_info: Option<String>,
}

impl AccessibilityDto {
    pub fn into_domain(self) -> AccessibilityInfo {
        AccessibilityInfo {
            entrance: self.entrance.map(EntranceDto::into_domain),
            restroom: self.restroom.map(RestroomDto::into_domain),
            parking: self.parking.map(ParkingDto::into_domain),
            floor: self.floor.map(FloorDto::into_domain),
            additional_info: self.additional_info,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EntranceDto {
    steps: Option<StepsDto>,
    door: Option<DoorDto>,
    additional_info: Option<String>,
}

impl EntranceDto {
    fn into_domain(self) -> EntranceInfo {
        EntranceInfo {
            steps: self.steps.map(StepsDto::into_domain),
            door: self.door.map(DoorDto::into_domain),
            additional_info: self.additional_info,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StepsDto {
    has_stairs: Option<bool>,
    step_count: Option<i64>,
    ramp: Option<String>,
    #[serde(alias = "lift")]
    elevator: Option<String>,
}

impl StepsDto {
    fn into_domain(self) -> EntranceSteps {
        EntranceSteps {
            has_stairs: self.has_stairs,
            step_count: parse_count("entrance.steps.step_count", self.step_count),
            ramp: parse_status("entrance.steps.ramp", self.ramp.as_deref()),
            elevator: parse_status("entrance.steps.elevator", self.elevator.as_deref()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DoorDto {
    #[serde(alias = "width")]
    door_opening: Option<String>,
    automatic_door: Option<bool>,
}

impl DoorDto {
    fn into_domain(self) -> EntranceDoor {
        EntranceDoor {
            door_opening: parse_status("entrance.door.door_opening", self.door_opening.as_deref()),
            automatic_door: self.automatic_door,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestroomDto {
    door_width: Option<bool>,
    #[serde(alias = "room_maneuver")]
    room_spaciousness: Option<String>,
    grab_rails: Option<String>,
    toilet_seat: Option<String>,
    sink: Option<String>,
    has_emergency_alarm: Option<bool>,
    euro_key: Option<bool>,
    additional_info: Option<String>,
}

impl RestroomDto {
    fn into_domain(self) -> RestroomInfo {
        RestroomInfo {
            door_width: self.door_width,
            room_spaciousness: parse_status(
                "restroom.room_spaciousness",
                self.room_spaciousness.as_deref(),
            ),
            grab_rails: parse_status("restroom.grab_rails", self.grab_rails.as_deref()),
            toilet_seat: parse_status("restroom.toilet_seat", self.toilet_seat.as_deref()),
            sink: parse_status("restroom.sink", self.sink.as_deref()),
            has_emergency_alarm: self.has_emergency_alarm,
            euro_key: self.euro_key,
            additional_info: self.additional_info,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ParkingDto {
    has_accessible_spots: Option<bool>,
    spot_count: Option<i64>,
    parking_type: Option<String>,
    has_smooth_surface: Option<bool>,
    has_elevator: Option<bool>,
    elevator: Option<ElevatorDto>,
    additional_info: Option<String>,
}

impl ParkingDto {
    fn into_domain(self) -> ParkingInfo {
        ParkingInfo {
            has_accessible_spots: self.has_accessible_spots,
            spot_count: parse_count("parking.spot_count", self.spot_count),
            parking_type: parse_parking_type(self.parking_type.as_deref()),
            has_smooth_surface: self.has_smooth_surface,
            has_elevator: self.has_elevator,
            elevator: self.elevator.map(ElevatorDto::into_domain),
            additional_info: self.additional_info,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FloorDto {
    level: Option<i64>,
    has_elevator: Option<bool>,
    elevator: Option<ElevatorDto>,
    additional_info: Option<String>,
}

impl FloorDto {
    fn into_domain(self) -> FloorInfo {
        FloorInfo {
            level: parse_level(self.level),
            has_elevator: self.has_elevator,
            elevator: self.elevator.map(ElevatorDto::into_domain),
            additional_info: self.additional_info,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ElevatorDto {
    is_available: Option<bool>,
    is_spacious_enough: Option<bool>,
    has_braille_buttons: Option<bool>,
    has_audio_announcements: Option<bool>,
    additional_info: Option<String>,
}

impl ElevatorDto {
    fn into_domain(self) -> ElevatorInfo {
        ElevatorInfo {
            is_available: self.is_available,
            is_spacious_enough: self.is_spacious_enough,
            has_braille_buttons: self.has_braille_buttons,
            has_audio_announcements: self.has_audio_announcements,
            additional_info: self.additional_info,
        }
    }
}
