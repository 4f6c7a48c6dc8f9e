use crate::api::error::ApiError;

pub fn validate_required<T>(value: Option<T>, field_name: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::bad_request(format!("{} is required", field_name)))
}

pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("{} cannot be empty", field_name)));
    }
    Ok(())
}

/// Amounts must be finite and non-negative. Zero is a legal expense amount.
pub fn validate_amount(amount: f64) -> Result<(), ApiError> {
    if !amount.is_finite() {
        return Err(ApiError::bad_request("amount must be a finite number"));
    }
    if amount < 0.0 {
        return Err(ApiError::bad_request("amount cannot be negative"));
    }
    Ok(())
}
