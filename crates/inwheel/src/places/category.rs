use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind of place, as tagged in OSM and stored by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlaceCategory {
    Restaurant,
    Cafe,
    Bar,
    Pub,
    Pharmacy,
    Hospital,
    Toilets,
    Parking,
    Library,
    Bank,
    Cinema,
    Hotel,
    Museum,
    Supermarket,
    #[default]
    Unknown,
}

impl PlaceCategory {
    pub const fn label(self) -> &'static str {
        match self {
            PlaceCategory::Restaurant => "restaurant",
            PlaceCategory::Cafe => "cafe",
            PlaceCategory::Bar => "bar",
            PlaceCategory::Pub => "pub",
            PlaceCategory::Pharmacy => "pharmacy",
            PlaceCategory::Hospital => "hospital",
            PlaceCategory::Toilets => "toilets",
            PlaceCategory::Parking => "parking",
            PlaceCategory::Library => "library",
            PlaceCategory::Bank => "bank",
            PlaceCategory::Cinema => "cinema",
            PlaceCategory::Hotel => "hotel",
            PlaceCategory::Museum => "museum",
            PlaceCategory::Supermarket => "supermarket",
            PlaceCategory::Unknown => "unknown",
        }
    }

    /// Case-insensitive lookup; anything unrecognized is `Unknown`.
    pub fn from_raw(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "restaurant" | "fast_food" => PlaceCategory::Restaurant,
            "cafe" => PlaceCategory::Cafe,
            "bar" => PlaceCategory::Bar,
            "pub" => PlaceCategory::Pub,
            "pharmacy" => PlaceCategory::Pharmacy,
            "hospital" | "clinic" => PlaceCategory::Hospital,
            "toilets" | "toilet" => PlaceCategory::Toilets,
            "parking" => PlaceCategory::Parking,
            "library" => PlaceCategory::Library,
            "bank" => PlaceCategory::Bank,
            "cinema" => PlaceCategory::Cinema,
            "hotel" => PlaceCategory::Hotel,
            "museum" => PlaceCategory::Museum,
            "supermarket" => PlaceCategory::Supermarket,
            _ => PlaceCategory::Unknown,
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PlaceCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for PlaceCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::from_raw).unwrap_or_default())
    }
}
