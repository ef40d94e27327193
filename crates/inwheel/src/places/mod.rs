//! Place-level evaluation: turns stored places or raw OSM tags into
//! accessibility reports, and serves them over HTTP.

mod category;
mod config;
mod evaluator;
mod report;
pub mod router;

#[cfg(test)]
mod tests;

pub use category::PlaceCategory;
pub use config::{EvaluatorConfig, DEFAULT_MAX_BATCH_SIZE};
pub use evaluator::PlaceEvaluator;
pub use report::{BatchEvaluation, PlaceAccessibilityReport, StatusTally, TagEvaluation};
pub use router::accessibility_router;
