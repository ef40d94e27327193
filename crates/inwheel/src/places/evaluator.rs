use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, warn};

use super::config::EvaluatorConfig;
use super::report::{BatchEvaluation, PlaceAccessibilityReport, TagEvaluation};
use crate::accessibility::AccessibilityInfo;
use crate::ingest::{wheelchair_tag_status, IngestError, PlaceRow};

/// Stateless evaluator turning stored places into accessibility reports.
#[derive(Debug, Clone, Default)]
pub struct PlaceEvaluator {
    config: EvaluatorConfig,
}

impl PlaceEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates one place. Facts that cannot be decoded are treated as
    /// missing and noted on the report.
    pub fn evaluate(&self, place: &PlaceRow) -> PlaceAccessibilityReport {
        let mut notes = Vec::new();
        let facts = match place.facts() {
            Ok(facts) => facts,
            Err(err) => {
                warn!(place_id = %place.id, error = %err, "evaluating place without its facts");
                notes.push(err.to_string());
                AccessibilityInfo::default()
            }
        };

        if facts.entrance.is_none() {
            notes.push("no entrance information".to_string());
        }

        let report = PlaceAccessibilityReport {
            place_id: place.id.clone(),
            name: place.name.clone(),
            category: place.category,
            overall: facts.general_status(),
            entrance: facts.entrance.as_ref().map(|entrance| entrance.status()),
            restroom: facts.restroom_status(),
            parking: facts.parking_status(),
            floor: facts.floor_status(),
            has_user_updates: place.has_user_updates(),
            notes,
            evaluated_at: Utc::now(),
        };

        debug!(place_id = %report.place_id, overall = %report.overall, "evaluated place");
        report
    }

    /// Evaluates a batch, refusing batches above the configured size.
    pub fn evaluate_batch(&self, places: &[PlaceRow]) -> Result<BatchEvaluation, IngestError> {
        let limit = self.config.max_batch_size;
        if places.len() > limit {
            return Err(IngestError::BatchTooLarge {
                size: places.len(),
                limit,
            });
        }

        let reports: Vec<_> = places.iter().map(|place| self.evaluate(place)).collect();
        let tally = reports.iter().map(|report| report.overall).collect();

        Ok(BatchEvaluation { reports, tally })
    }

    pub fn evaluate_tags(&self, tags: &BTreeMap<String, String>) -> TagEvaluation {
        let facts = AccessibilityInfo::from_osm_tags(tags, &self.config.thresholds);
        TagEvaluation::new(facts, wheelchair_tag_status(tags))
    }
}
