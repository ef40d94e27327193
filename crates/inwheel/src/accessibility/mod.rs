//! Accessibility status inference.
//!
//! Each fact record evaluates itself into an [`AccessibilityStatus`]; the
//! evaluators are pure and total, so a missing or unrecognized fact can only
//! ever make the answer more conservative.

mod elevator;
mod entrance;
mod floor;
mod info;
mod parking;
mod restroom;
mod status;

#[cfg(test)]
mod tests;

pub use elevator::ElevatorInfo;
pub use entrance::{EntranceDoor, EntranceInfo, EntranceSteps};
pub use floor::FloorInfo;
pub use info::AccessibilityInfo;
pub use parking::{ParkingInfo, ParkingType};
pub use restroom::RestroomInfo;
pub use status::{AccessibilityStatus, UnrecognizedStatus};
