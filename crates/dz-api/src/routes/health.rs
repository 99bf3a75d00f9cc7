//! Service banner and health check endpoints.

use axum::Json;
use serde_json::{Value, json};

/// GET /: service banner.
pub async fn status() -> Json<Value> {
    Json(json!({
        "service": "diagnoze-api",
        "status": "active",
    }))
}

/// GET /health: liveness check.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
