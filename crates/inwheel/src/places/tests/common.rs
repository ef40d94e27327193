use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};

use crate::ingest::PlaceRow;
use crate::places::{accessibility_router, EvaluatorConfig, PlaceEvaluator};

pub(super) fn evaluator_with_limit(max_batch_size: usize) -> PlaceEvaluator {
    PlaceEvaluator::new(EvaluatorConfig {
        max_batch_size,
        ..EvaluatorConfig::default()
    })
}

pub(super) fn router_with_limit(max_batch_size: usize) -> Router {
    accessibility_router(Arc::new(evaluator_with_limit(max_batch_size)))
}

pub(super) fn step_free_source() -> Value {
    json!({
        "entrance": {
            "steps": {"has_stairs": false},
            "door": {"door_opening": "fully_accessible", "automatic_door": true}
        }
    })
}

pub(super) fn place(id: &str, source: Value, user: Value) -> PlaceRow {
    serde_json::from_value(json!({
        "id": id,
        "osm_id": 1234,
        "name": format!("Place {id}"),
        "category": "cafe",
        "lat": 60.1699,
        "lon": 24.9384,
        "source_accessibility": source,
        "user_accessibility": user,
        "last_osm_update": "2024-03-01T08:00:00Z"
    }))
    .expect("valid place row")
}

pub(super) fn accessible_place(id: &str) -> PlaceRow {
    place(id, step_free_source(), Value::Null)
}

pub(super) fn stepped_place(id: &str) -> PlaceRow {
    place(
        id,
        json!({"entrance": {
            "steps": {"has_stairs": true, "step_count": 4},
            "door": {"door_opening": "fully_accessible", "automatic_door": true}
        }}),
        Value::Null,
    )
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

pub(super) fn post_json(uri: &str, body: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(body).expect("serialize body"),
        ))
        .expect("request")
}
