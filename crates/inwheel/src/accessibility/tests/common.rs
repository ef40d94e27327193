use crate::accessibility::{
    AccessibilityInfo, AccessibilityStatus, ElevatorInfo, EntranceDoor, EntranceInfo,
    EntranceSteps, FloorInfo, ParkingInfo, ParkingType, RestroomInfo,
};

pub(super) const FLAGS: [Option<bool>; 3] = [None, Some(false), Some(true)];

pub(super) const STATUSES: [Option<AccessibilityStatus>; 5] = [
    None,
    Some(AccessibilityStatus::Unknown),
    Some(AccessibilityStatus::NotAccessible),
    Some(AccessibilityStatus::LimitedAccessibility),
    Some(AccessibilityStatus::FullyAccessible),
];

pub(super) const COUNTS: [Option<u32>; 4] = [None, Some(0), Some(1), Some(3)];

pub(super) const PARKING_TYPES: [Option<ParkingType>; 5] = [
    None,
    Some(ParkingType::Surface),
    Some(ParkingType::Underground),
    Some(ParkingType::MultiStorey),
    Some(ParkingType::Rooftop),
];

pub(super) fn step_free() -> EntranceSteps {
    EntranceSteps {
        has_stairs: Some(false),
        ..EntranceSteps::default()
    }
}

pub(super) fn automatic_wide_door() -> EntranceDoor {
    EntranceDoor {
        door_opening: Some(AccessibilityStatus::FullyAccessible),
        automatic_door: Some(true),
    }
}

pub(super) fn open_entrance() -> EntranceInfo {
    EntranceInfo {
        steps: Some(step_free()),
        door: Some(automatic_wide_door()),
        additional_info: None,
    }
}

pub(super) fn full_elevator() -> ElevatorInfo {
    ElevatorInfo {
        is_available: Some(true),
        is_spacious_enough: Some(true),
        has_braille_buttons: Some(true),
        has_audio_announcements: Some(true),
        additional_info: None,
    }
}

pub(super) fn equipped_restroom() -> RestroomInfo {
    RestroomInfo {
        door_width: Some(true),
        room_spaciousness: Some(AccessibilityStatus::FullyAccessible),
        grab_rails: Some(AccessibilityStatus::FullyAccessible),
        toilet_seat: Some(AccessibilityStatus::FullyAccessible),
        sink: Some(AccessibilityStatus::FullyAccessible),
        has_emergency_alarm: Some(true),
        euro_key: Some(true),
        additional_info: None,
    }
}

pub(super) fn surface_parking() -> ParkingInfo {
    ParkingInfo {
        has_accessible_spots: Some(true),
        spot_count: Some(2),
        parking_type: Some(ParkingType::Surface),
        has_smooth_surface: Some(true),
        has_elevator: None,
        elevator: None,
        additional_info: None,
    }
}

pub(super) fn ground_floor() -> FloorInfo {
    FloorInfo {
        level: Some(0),
        ..FloorInfo::default()
    }
}

pub(super) fn fully_accessible_place() -> AccessibilityInfo {
    AccessibilityInfo {
        entrance: Some(open_entrance()),
        restroom: Some(equipped_restroom()),
        parking: Some(surface_parking()),
        floor: Some(ground_floor()),
        additional_info: Some("Staff happy to help".to_string()),
    }
}

/// Every steps record buildable from the shared fact domains.
pub(super) fn all_steps() -> Vec<EntranceSteps> {
    let mut records = Vec::new();
    for has_stairs in FLAGS {
        for step_count in COUNTS {
            for ramp in STATUSES {
                for elevator in STATUSES {
                    records.push(EntranceSteps {
                        has_stairs,
                        step_count,
                        ramp,
                        elevator,
                    });
                }
            }
        }
    }
    records
}

pub(super) fn all_doors() -> Vec<EntranceDoor> {
    let mut records = Vec::new();
    for door_opening in STATUSES {
        for automatic_door in FLAGS {
            records.push(EntranceDoor {
                door_opening,
                automatic_door,
            });
        }
    }
    records
}

pub(super) fn all_elevators() -> Vec<ElevatorInfo> {
    let mut records = Vec::new();
    for is_available in FLAGS {
        for is_spacious_enough in FLAGS {
            for has_braille_buttons in FLAGS {
                for has_audio_announcements in FLAGS {
                    records.push(ElevatorInfo {
                        is_available,
                        is_spacious_enough,
                        has_braille_buttons,
                        has_audio_announcements,
                        additional_info: None,
                    });
                }
            }
        }
    }
    records
}

pub(super) fn all_restrooms() -> Vec<RestroomInfo> {
    let mut records = Vec::new();
    for door_width in FLAGS {
        for room_spaciousness in STATUSES {
            for grab_rails in STATUSES {
                for toilet_seat in STATUSES {
                    for sink in STATUSES {
                        for has_emergency_alarm in FLAGS {
                            records.push(RestroomInfo {
                                door_width,
                                room_spaciousness,
                                grab_rails,
                                toilet_seat,
                                sink,
                                has_emergency_alarm,
                                euro_key: None,
                                additional_info: None,
                            });
                        }
                    }
                }
            }
        }
    }
    records
}

/// Parking records; the nested elevator is drawn from a few representative shapes.
pub(super) fn all_parking() -> Vec<ParkingInfo> {
    let elevators = [
        None,
        Some(full_elevator()),
        Some(ElevatorInfo {
            is_available: Some(false),
            ..ElevatorInfo::default()
        }),
        Some(ElevatorInfo {
            is_spacious_enough: Some(false),
            ..full_elevator()
        }),
        Some(ElevatorInfo::default()),
    ];

    let mut records = Vec::new();
    for has_accessible_spots in FLAGS {
        for spot_count in COUNTS {
            for parking_type in PARKING_TYPES {
                for has_smooth_surface in FLAGS {
                    for has_elevator in FLAGS {
                        for elevator in &elevators {
                            records.push(ParkingInfo {
                                has_accessible_spots,
                                spot_count,
                                parking_type,
                                has_smooth_surface,
                                has_elevator,
                                elevator: elevator.clone(),
                                additional_info: None,
                            });
                        }
                    }
                }
            }
        }
    }
    records
}

/// Entrances over every step and door record, each side also left out.
pub(super) fn all_entrances() -> Vec<EntranceInfo> {
    let steps: Vec<Option<EntranceSteps>> =
        std::iter::once(None).chain(all_steps().into_iter().map(Some)).collect();
    let doors: Vec<Option<EntranceDoor>> =
        std::iter::once(None).chain(all_doors().into_iter().map(Some)).collect();

    let mut records = Vec::new();
    for steps in &steps {
        for door in &doors {
            records.push(EntranceInfo {
                steps: steps.clone(),
                door: door.clone(),
                additional_info: None,
            });
        }
    }
    records
}

pub(super) fn all_floors() -> Vec<FloorInfo> {
    let elevators: Vec<Option<ElevatorInfo>> = std::iter::once(None)
        .chain(all_elevators().into_iter().map(Some))
        .collect();

    let mut records = Vec::new();
    for level in [None, Some(0), Some(2), Some(-1)] {
        for has_elevator in FLAGS {
            for elevator in &elevators {
                records.push(FloorInfo {
                    level,
                    has_elevator,
                    elevator: elevator.clone(),
                    additional_info: None,
                });
            }
        }
    }
    records
}

/// One record per distinct status, plus the absent record.
pub(super) fn one_per_status<T: Clone>(
    records: Vec<T>,
    status: impl Fn(&T) -> AccessibilityStatus,
) -> Vec<Option<T>> {
    let mut picked = vec![None];
    for wanted in AccessibilityStatus::ALL {
        if let Some(record) = records.iter().find(|record| status(record) == wanted) {
            picked.push(Some(record.clone()));
        }
    }
    picked
}

/// Places combining one record per status from every category.
pub(super) fn representative_places() -> Vec<AccessibilityInfo> {
    let entrances = one_per_status(all_entrances(), EntranceInfo::status);
    let restrooms = one_per_status(all_restrooms(), RestroomInfo::status);
    let parking = one_per_status(all_parking(), ParkingInfo::status);
    let floors = one_per_status(all_floors(), FloorInfo::status);

    let mut places = Vec::new();
    for entrance in &entrances {
        for restroom in &restrooms {
            for parking in &parking {
                for floor in &floors {
                    places.push(AccessibilityInfo {
                        entrance: entrance.clone(),
                        restroom: restroom.clone(),
                        parking: parking.clone(),
                        floor: floor.clone(),
                        additional_info: None,
                    });
                }
            }
        }
    }
    places
}
