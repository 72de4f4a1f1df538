//! Shared application state for all routes.

use crate::store::TodoStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: TodoStore,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }
}
