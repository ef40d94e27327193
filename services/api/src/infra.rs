use inwheel::error::AppError;
use inwheel::ingest::{parse_place_rows, PlaceRow};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads a JSON file holding one place row or an array of rows.
pub(crate) fn load_place_rows(path: &Path) -> Result<Vec<PlaceRow>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(parse_place_rows(&raw)?)
}
