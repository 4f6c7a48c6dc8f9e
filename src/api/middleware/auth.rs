use axum::http::HeaderMap;

use crate::api::error::ApiError;

/// Check the Authorization header against the static admin token.
///
/// The original gate is an exact header match, no scheme prefix.
pub async fn validate_admin(headers: &HeaderMap, admin_token: &str) -> Result<(), ApiError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::forbidden("Missing Authorization header"))?;

    if auth_header != admin_token {
        return Err(ApiError::forbidden("Invalid Authorization header"));
    }

    Ok(())
}
