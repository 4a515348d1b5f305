use axum::{response::Json as ResponseJson, routing::get, Router};
use chrono::Utc;
use std::sync::Arc;

use crate::state::AppState;

/// Health check endpoint. Reports liveness only, no dependency status.
pub async fn health_check_handler() -> ResponseJson<serde_json::Value> {
    ResponseJson(serde_json::json!({
        "status": "healthy",
        "service": "invoice-api",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn create_health_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check_handler))
}
