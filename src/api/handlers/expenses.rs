use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    api::{
        error::ApiError,
        validation::{validate_amount, validate_not_empty, validate_required},
    },
    expenses::models::{Expense, ExpenseDraft, ExpenseFilter, ExpensePatch},
    utils::app_config::AppConfig,
};

/// Query parameters for filtering expenses
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub category: Option<String>,
    #[serde(rename = "maxAmount")]
    pub max_amount: Option<String>,
}

/// Create/replace request body. Every field is optional at the wire level so
/// validation can report which one is missing instead of a bare decode error.
#[derive(Debug, Default, Deserialize)]
pub struct ExpensePayload {
    pub title: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

fn validate_payload(payload: ExpensePayload) -> Result<ExpenseDraft, ApiError> {
    let title = validate_required(payload.title, "title")?;
    validate_not_empty(&title, "title")?;

    let category = validate_required(payload.category, "category")?;
    validate_not_empty(&category, "category")?;

    let amount = validate_required(payload.amount, "amount")?;
    validate_amount(amount)?;

    let date = validate_required(payload.date, "date")?;
    validate_not_empty(&date, "date")?;

    Ok(ExpenseDraft {
        title,
        category,
        amount,
        date,
    })
}

fn validate_patch(patch: &ExpensePatch) -> Result<(), ApiError> {
    if let Some(title) = &patch.title {
        validate_not_empty(title, "title")?;
    }
    if let Some(category) = &patch.category {
        validate_not_empty(category, "category")?;
    }
    if let Some(amount) = patch.amount {
        validate_amount(amount)?;
    }
    if let Some(date) = &patch.date {
        validate_not_empty(date, "date")?;
    }
    Ok(())
}

/// GET /expenses - All expenses in insertion order
pub async fn list_expenses(
    State(app_config): State<AppConfig>,
) -> Result<(StatusCode, Json<Vec<Expense>>), ApiError> {
    let store = app_config
        .store
        .read()
        .map_err(|_| ApiError::internal_error("expense store lock poisoned"))?;

    Ok((StatusCode::OK, Json(store.list())))
}

/// GET /expenses/search - Filter by category and/or maximum amount
pub async fn search_expenses(
    State(app_config): State<AppConfig>,
    Query(params): Query<SearchParams>,
) -> Result<(StatusCode, Json<Vec<Expense>>), ApiError> {
    // An unparsable bound becomes NaN, which fails every comparison and
    // matches nothing.
    let max_amount = params
        .max_amount
        .as_deref()
        .map(|raw| raw.parse::<f64>().unwrap_or(f64::NAN));

    let filter = ExpenseFilter {
        category: params.category,
        max_amount,
    };

    let store = app_config
        .store
        .read()
        .map_err(|_| ApiError::internal_error("expense store lock poisoned"))?;

    Ok((StatusCode::OK, Json(store.search(&filter))))
}

/// GET /expenses/{id} - Get a single expense
pub async fn get_expense(
    State(app_config): State<AppConfig>,
    Path(id): Path<u64>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let store = app_config
        .store
        .read()
        .map_err(|_| ApiError::internal_error("expense store lock poisoned"))?;

    store
        .get(id)
        .map(|expense| (StatusCode::OK, Json(expense)))
        .ok_or_else(|| ApiError::not_found("Expense"))
}

/// POST /expenses - Create a new expense
pub async fn create_expense(
    State(app_config): State<AppConfig>,
    Json(payload): Json<ExpensePayload>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let draft = validate_payload(payload)?;

    let mut store = app_config
        .store
        .write()
        .map_err(|_| ApiError::internal_error("expense store lock poisoned"))?;

    let expense = store.create(draft);
    tracing::info!("created expense {}", expense.id);

    Ok((StatusCode::CREATED, Json(expense)))
}

/// PUT /expenses/{id} - Replace every field of an expense
pub async fn replace_expense(
    State(app_config): State<AppConfig>,
    Path(id): Path<u64>,
    Json(payload): Json<ExpensePayload>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let mut store = app_config
        .store
        .write()
        .map_err(|_| ApiError::internal_error("expense store lock poisoned"))?;

    // Not-found wins over validation so a missing id always reports 404.
    if !store.contains(id) {
        return Err(ApiError::not_found("Expense"));
    }

    let draft = validate_payload(payload)?;
    let expense = store
        .replace(id, draft)
        .ok_or_else(|| ApiError::not_found("Expense"))?;

    Ok((StatusCode::OK, Json(expense)))
}

/// PATCH /expenses/{id} - Update a subset of an expense's fields
pub async fn update_expense(
    State(app_config): State<AppConfig>,
    Path(id): Path<u64>,
    Json(patch): Json<ExpensePatch>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let mut store = app_config
        .store
        .write()
        .map_err(|_| ApiError::internal_error("expense store lock poisoned"))?;

    if !store.contains(id) {
        return Err(ApiError::not_found("Expense"));
    }

    validate_patch(&patch)?;
    let expense = store
        .update(id, patch)
        .ok_or_else(|| ApiError::not_found("Expense"))?;

    Ok((StatusCode::OK, Json(expense)))
}

/// DELETE /expenses/{id} - Remove an expense
pub async fn delete_expense(
    State(app_config): State<AppConfig>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let mut store = app_config
        .store
        .write()
        .map_err(|_| ApiError::internal_error("expense store lock poisoned"))?;

    if store.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Expense"))
    }
}

/// GET /expenses/error - Deliberately fail to exercise the 500 boundary
pub async fn trigger_error() -> ApiError {
    ApiError::internal_error("synthetic failure from the error injection route")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> ExpensePayload {
        ExpensePayload {
            title: Some("Groceries".to_string()),
            category: Some("Food".to_string()),
            amount: Some(150.0),
            date: Some("2024-11-24".to_string()),
        }
    }

    #[test]
    fn test_payload_with_all_fields_passes() {
        let draft = validate_payload(full_payload()).unwrap();
        assert_eq!(draft.title, "Groceries");
        assert_eq!(draft.amount, 150.0);
    }

    #[test]
    fn test_payload_missing_title_fails() {
        let payload = ExpensePayload {
            title: None,
            ..full_payload()
        };
        assert!(validate_payload(payload).is_err());
    }

    #[test]
    fn test_payload_empty_title_fails() {
        let payload = ExpensePayload {
            title: Some("   ".to_string()),
            ..full_payload()
        };
        assert!(validate_payload(payload).is_err());
    }

    #[test]
    fn test_payload_zero_amount_passes() {
        let payload = ExpensePayload {
            amount: Some(0.0),
            ..full_payload()
        };
        assert_eq!(validate_payload(payload).unwrap().amount, 0.0);
    }

    #[test]
    fn test_payload_negative_amount_fails() {
        let payload = ExpensePayload {
            amount: Some(-10.0),
            ..full_payload()
        };
        assert!(validate_payload(payload).is_err());
    }

    #[test]
    fn test_patch_allows_absent_fields() {
        assert!(validate_patch(&ExpensePatch::default()).is_ok());
    }

    #[test]
    fn test_patch_rejects_present_but_empty_field() {
        let patch = ExpensePatch {
            category: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_patch(&patch).is_err());
    }
}
