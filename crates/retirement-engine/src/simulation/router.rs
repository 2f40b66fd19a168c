use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::info;

use super::intake::SimulationRequest;
use super::rules::rule_catalogue;
use super::RetirementEngine;

/// Router builder exposing HTTP endpoints for simulations and the rule catalogue.
pub fn simulation_router(engine: Arc<RetirementEngine>) -> Router {
    Router::new()
        .route("/api/v1/simulations", post(simulate_handler))
        .route("/api/v1/simulations/batch", post(batch_handler))
        .route("/api/v1/rules", get(rules_handler))
        .with_state(engine)
}

pub(crate) async fn simulate_handler(
    State(engine): State<Arc<RetirementEngine>>,
    axum::Json(request): axum::Json<SimulationRequest>,
) -> Response {
    match engine.evaluate_request(request) {
        Ok(outcome) => {
            let payload = json!({
                "outcome": outcome,
                "memory": outcome.memory(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
                "field": error.field(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn batch_handler(
    State(engine): State<Arc<RetirementEngine>>,
    axum::Json(requests): axum::Json<Vec<SimulationRequest>>,
) -> Response {
    let submitted = requests.len();
    let entries = tokio::task::spawn_blocking(move || engine.evaluate_batch(requests)).await;

    match entries {
        Ok(entries) => {
            info!(submitted, "batch simulation served");
            (StatusCode::OK, axum::Json(entries)).into_response()
        }
        Err(join_error) => {
            let payload = json!({
                "error": join_error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn rules_handler() -> Response {
    (StatusCode::OK, axum::Json(rule_catalogue())).into_response()
}
