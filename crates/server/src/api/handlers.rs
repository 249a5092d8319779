use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use soller_core::Config;

use crate::metrics::encode_metrics;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<Config> {
    Json(state.config().clone())
}

/// GET /metrics - Prometheus text exposition.
pub async fn metrics() -> String {
    encode_metrics()
}
