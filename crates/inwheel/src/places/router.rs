use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;

use super::evaluator::PlaceEvaluator;
use super::report::BatchEvaluation;
use crate::error::AppError;
use crate::ingest::PlaceRow;

/// Router exposing place and OSM tag evaluation.
pub fn accessibility_router(evaluator: Arc<PlaceEvaluator>) -> Router {
    Router::new()
        .route("/api/v1/places/accessibility", post(place_handler))
        .route("/api/v1/places/accessibility/batch", post(batch_handler))
        .route("/api/v1/osm/accessibility", post(tags_handler))
        .with_state(evaluator)
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagsRequest {
    tags: BTreeMap<String, String>,
}

pub(crate) async fn place_handler(
    State(evaluator): State<Arc<PlaceEvaluator>>,
    axum::Json(place): axum::Json<PlaceRow>,
) -> Response {
    let report = evaluator.evaluate(&place);
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn batch_handler(
    State(evaluator): State<Arc<PlaceEvaluator>>,
    axum::Json(places): axum::Json<Vec<PlaceRow>>,
) -> Result<axum::Json<BatchEvaluation>, AppError> {
    let batch = evaluator.evaluate_batch(&places)?;
    Ok(axum::Json(batch))
}

pub(crate) async fn tags_handler(
    State(evaluator): State<Arc<PlaceEvaluator>>,
    axum::Json(request): axum::Json<TagsRequest>,
) -> Response {
    let evaluation = evaluator.evaluate_tags(&request.tags);
    (StatusCode::OK, axum::Json(evaluation)).into_response()
}
