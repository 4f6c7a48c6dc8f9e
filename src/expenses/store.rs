use std::fs;
use std::path::Path;

use anyhow::Context;

use super::models::{Expense, ExpenseDraft, ExpenseFilter, ExpensePatch};

/// In-memory storage for expense records.
///
/// Records keep their insertion order, which is also the default list order.
/// Ids come from a monotonic counter seeded past the largest id in the
/// snapshot, so deleting a record never frees its id for reuse.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: u64,
}

impl ExpenseStore {
    /// Create a new empty expense store
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from an existing snapshot of records
    pub fn with_seed(expenses: Vec<Expense>) -> Self {
        let next_id = expenses.iter().map(|exp| exp.id).max().unwrap_or(0) + 1;
        Self { expenses, next_id }
    }

    /// Load the startup snapshot from a JSON file holding an array of records
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read expense snapshot {}", path.display()))?;
        let expenses: Vec<Expense> = serde_json::from_str(&raw)
            .with_context(|| format!("expense snapshot {} is not valid JSON", path.display()))?;
        Ok(Self::with_seed(expenses))
    }

    /// All records in insertion order
    pub fn list(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// Records matching the filter, in insertion order.
    ///
    /// Category comparison is case-insensitive. A NaN amount bound fails
    /// every `<=` comparison and therefore matches nothing.
    pub fn search(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|exp| {
                if let Some(category) = &filter.category {
                    if exp.category.to_lowercase() != category.to_lowercase() {
                        return false;
                    }
                }
                if let Some(max_amount) = filter.max_amount {
                    if !(exp.amount <= max_amount) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }

    /// Get a record by id
    pub fn get(&self, id: u64) -> Option<Expense> {
        self.expenses.iter().find(|exp| exp.id == id).cloned()
    }

    /// Whether a record with this id exists
    pub fn contains(&self, id: u64) -> bool {
        self.expenses.iter().any(|exp| exp.id == id)
    }

    /// Append a new record, assigning the next counter id
    pub fn create(&mut self, draft: ExpenseDraft) -> Expense {
        let expense = Expense {
            id: self.next_id,
            title: draft.title,
            category: draft.category,
            amount: draft.amount,
            date: draft.date,
        };
        self.next_id += 1;
        self.expenses.push(expense.clone());
        expense
    }

    /// Overwrite every field of the record with this id
    pub fn replace(&mut self, id: u64, draft: ExpenseDraft) -> Option<Expense> {
        let expense = self.expenses.iter_mut().find(|exp| exp.id == id)?;
        expense.title = draft.title;
        expense.category = draft.category;
        expense.amount = draft.amount;
        expense.date = draft.date;
        Some(expense.clone())
    }

    /// Apply a partial update to the record with this id
    pub fn update(&mut self, id: u64, patch: ExpensePatch) -> Option<Expense> {
        let expense = self.expenses.iter_mut().find(|exp| exp.id == id)?;
        if let Some(title) = patch.title {
            expense.title = title;
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }
        if let Some(date) = patch.date {
            expense.date = date;
        }
        Some(expense.clone())
    }

    /// Remove the record with this id; returns whether anything was removed
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|exp| exp.id != id);
        self.expenses.len() != before
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn draft(title: &str, category: &str, amount: f64, date: &str) -> ExpenseDraft {
        ExpenseDraft {
            title: title.to_string(),
            category: category.to_string(),
            amount,
            date: date.to_string(),
        }
    }

    fn seeded_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store.create(draft("Groceries", "Food", 100.0, "2024-11-24"));
        store.create(draft("Restaurant", "Food", 150.0, "2024-11-23"));
        store.create(draft("Train ticket", "Travel", 50.0, "2024-11-20"));
        store
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = ExpenseStore::new();
        let first = store.create(draft("Book", "Education", 40.0, "2024-11-25"));
        let second = store.create(draft("Coffee", "Food", 12.5, "2024-11-25"));
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = seeded_store();
        assert!(store.remove(3));
        let created = store.create(draft("Cinema", "Leisure", 30.0, "2024-11-26"));
        assert_eq!(created.id, 4);
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_get_after_create_returns_created_record() {
        let mut store = ExpenseStore::new();
        let created = store.create(draft("Book", "Education", 40.0, "2024-11-25"));
        assert_eq!(store.get(created.id), Some(created));
    }

    #[test]
    fn test_remove_then_get_yields_none() {
        let mut store = seeded_store();
        assert!(store.remove(2));
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = seeded_store();
        assert!(store.remove(2));
        assert!(!store.remove(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = seeded_store();
        let ids: Vec<u64> = store.list().iter().map(|exp| exp.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_search_category_is_case_insensitive() {
        let store = seeded_store();
        let filter = ExpenseFilter {
            category: Some("food".to_string()),
            max_amount: None,
        };
        let results = store.search(&filter);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|exp| exp.category == "Food"));
    }

    #[test]
    fn test_search_filters_compose_with_and() {
        let store = seeded_store();
        let filter = ExpenseFilter {
            category: Some("Food".to_string()),
            max_amount: Some(120.0),
        };
        let results = store.search(&filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn test_search_without_filters_returns_everything() {
        let store = seeded_store();
        assert_eq!(store.search(&ExpenseFilter::default()).len(), 3);
    }

    #[test]
    fn test_search_nan_bound_matches_nothing() {
        let store = seeded_store();
        let filter = ExpenseFilter {
            category: None,
            max_amount: Some(f64::NAN),
        };
        assert!(store.search(&filter).is_empty());
    }

    #[test]
    fn test_update_touches_only_present_fields() {
        let mut store = seeded_store();
        let patch = ExpensePatch {
            amount: Some(75.0),
            ..Default::default()
        };
        let updated = store.update(1, patch).unwrap();
        assert_eq!(updated.amount, 75.0);
        assert_eq!(updated.title, "Groceries");
        assert_eq!(updated.category, "Food");
        assert_eq!(updated.date, "2024-11-24");
    }

    #[test]
    fn test_update_can_set_amount_to_zero() {
        let mut store = seeded_store();
        let patch = ExpensePatch {
            amount: Some(0.0),
            ..Default::default()
        };
        assert_eq!(store.update(1, patch).unwrap().amount, 0.0);
    }

    #[test]
    fn test_replace_overwrites_every_field() {
        let mut store = seeded_store();
        let replaced = store
            .replace(2, draft("Takeaway", "Food", 80.0, "2024-11-27"))
            .unwrap();
        assert_eq!(
            replaced,
            Expense {
                id: 2,
                title: "Takeaway".to_string(),
                category: "Food".to_string(),
                amount: 80.0,
                date: "2024-11-27".to_string(),
            }
        );
    }

    #[test]
    fn test_replace_unknown_id_yields_none() {
        let mut store = seeded_store();
        assert!(store.replace(99, draft("x", "x", 1.0, "2024-01-01")).is_none());
    }

    #[test]
    fn test_with_seed_counter_skips_past_largest_id() {
        let mut store = ExpenseStore::with_seed(vec![
            Expense {
                id: 7,
                title: "Rent".to_string(),
                category: "Housing".to_string(),
                amount: 900.0,
                date: "2024-11-01".to_string(),
            },
            Expense {
                id: 2,
                title: "Coffee".to_string(),
                category: "Food".to_string(),
                amount: 4.5,
                date: "2024-11-02".to_string(),
            },
        ]);
        assert_eq!(store.create(draft("Book", "Education", 20.0, "2024-11-03")).id, 8);
    }

    #[test]
    fn test_from_json_file_loads_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "Groceries", "category": "Food", "amount": 150.0, "date": "2024-11-24"}}]"#
        )
        .unwrap();

        let store = ExpenseStore::from_json_file(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().title, "Groceries");
    }

    #[test]
    fn test_from_json_file_missing_path_fails() {
        assert!(ExpenseStore::from_json_file("does/not/exist.json").is_err());
    }
}
