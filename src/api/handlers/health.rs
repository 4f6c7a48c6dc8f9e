use axum::Json;
use hyper::StatusCode;
use serde_json::{json, Value};

/// GET / - Service banner
pub async fn index() -> &'static str {
    "Expense tracking API"
}

/// GET /health - Liveness check, always public
pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
