use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::dto::AccessibilityDto;
use super::merge::{canonicalize_keys, merge_facts};
use super::IngestError;
use crate::accessibility::AccessibilityInfo;
use crate::places::PlaceCategory;

/// A place as stored by the backend, with source and user facts kept apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRow {
    pub id: String,
    #[serde(default)]
    pub osm_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub category: PlaceCategory,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub contact: Option<ContactInfo>,
    #[serde(default)]
    pub source_accessibility: Option<Value>,
    #[serde(default)]
    pub user_accessibility: Option<Value>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub last_osm_update: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub last_user_update: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
}

impl PlaceRow {
    /// Source facts with user facts layered on top. Legacy key spellings
    /// are renamed first so an answer under either name overrides the other.
    pub fn merged_facts(&self) -> Value {
        let source = self.source_accessibility.as_ref().unwrap_or(&Value::Null);
        let user = self.user_accessibility.as_ref().unwrap_or(&Value::Null);
        merge_facts(&canonicalize_keys(source), &canonicalize_keys(user))
    }

    /// Decodes the merged facts. Bad ratings never fail decoding; only a
    /// payload of the wrong shape (for example a string where a section
    /// object belongs) does.
    pub fn facts(&self) -> Result<AccessibilityInfo, IngestError> {
        let merged = self.merged_facts();
        if merged.is_null() {
            return Ok(AccessibilityInfo::default());
        }

        serde_json::from_value::<AccessibilityDto>(merged)
            .map(AccessibilityDto::into_domain)
            .map_err(|source| IngestError::InvalidFacts {
                place_id: self.id.clone(),
                source,
            })
    }

    /// Whether a user has edited this place since OSM data last changed.
    pub fn has_user_updates(&self) -> bool {
        match (self.last_user_update, self.last_osm_update) {
            (Some(user), Some(osm)) => user > osm,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Some(dt.and_utc());
    }

    warn!(value = trimmed, "ignoring unparseable timestamp");
    None
}
