use serde::{Deserialize, Serialize};

/// A single expense record as stored and served over the wire.
///
/// `date` is kept as `YYYY-MM-DD` text; the service does not check it for
/// calendar correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

/// A validated, complete field set for creating or fully replacing an expense.
/// Produced by request validation; the store never sees unchecked input.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

/// A partial update. Absent fields leave the stored value unchanged;
/// presence is tracked with `Option` so `amount: 0` means "set to zero",
/// not "field missing".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpensePatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

/// Search criteria. Absent filters impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    pub max_amount: Option<f64>,
}
