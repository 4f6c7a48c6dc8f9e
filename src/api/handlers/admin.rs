use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{api::error::ApiError, utils::app_config::AppConfig};

/// GET /admin/stats - Collection counters, behind the admin gate
pub async fn admin_stats(
    State(app_config): State<AppConfig>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let store = app_config
        .store
        .read()
        .map_err(|_| ApiError::internal_error("expense store lock poisoned"))?;

    Ok((StatusCode::OK, Json(json!({ "expenses": store.len() }))))
}
