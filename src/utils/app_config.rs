use std::sync::{Arc, RwLock};

use crate::expenses::store::ExpenseStore;

/// Shared application state handed to every handler.
///
/// The store is process-local mutable state; the lock is the required
/// mutual-exclusion discipline now that handlers run concurrently. No guard
/// is ever held across an await point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: Arc<RwLock<ExpenseStore>>,
}

impl AppConfig {
    pub fn new(store: ExpenseStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
