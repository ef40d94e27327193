//! Boundary between stored place data and the accessibility model.
//!
//! Backend rows carry two JSON fact payloads, one derived from
//! OpenStreetMap and one submitted by users. This module merges them, decodes
//! free-text ratings leniently and can derive source facts straight from OSM
//! tags.

mod dto;
mod merge;
mod normalizer;
mod osm;
mod parser;
mod row;

pub use dto::AccessibilityDto;
pub use merge::{canonicalize_keys, merge_facts};
pub use osm::{wheelchair_tag_status, TagThresholds};
pub use row::{ContactInfo, PlaceRow};

/// Failures while reading place data.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("invalid place data: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("accessibility facts for place {place_id} are malformed: {source}")]
    InvalidFacts {
        place_id: String,
        source: serde_json::Error,
    },
    #[error("batch of {size} places exceeds the limit of {limit}")]
    BatchTooLarge { size: usize, limit: usize },
}

/// Parses a JSON document holding either one place row or an array of them.
pub fn parse_place_rows(raw: &str) -> Result<Vec<PlaceRow>, IngestError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}
