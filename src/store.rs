//! In-memory todo store. Lives for the lifetime of the process; nothing is persisted.

use crate::error::AppError;
use crate::model::{Todo, TodoInput};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Inner {
    /// Last id handed out. Ids are never reused, even after a delete.
    last_id: i64,
    items: BTreeMap<i64, Todo>,
}

/// Cloneable handle to the shared todo collection. Iteration order is ascending id.
#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<Inner>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, AppError> {
        self.inner.read().map_err(|_| AppError::StateLock)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, AppError> {
        self.inner.write().map_err(|_| AppError::StateLock)
    }

    pub fn all(&self) -> Result<Vec<Todo>, AppError> {
        Ok(self.read()?.items.values().cloned().collect())
    }

    pub fn completed(&self) -> Result<Vec<Todo>, AppError> {
        Ok(self
            .read()?
            .items
            .values()
            .filter(|t| t.is_complete)
            .cloned()
            .collect())
    }

    pub fn find(&self, id: i64) -> Result<Option<Todo>, AppError> {
        Ok(self.read()?.items.get(&id).cloned())
    }

    /// Insert with the next id and return the stored item.
    pub fn add(&self, input: TodoInput) -> Result<Todo, AppError> {
        let mut guard = self.write()?;
        guard.last_id += 1;
        let todo = Todo::from_input(guard.last_id, input);
        guard.items.insert(todo.id, todo.clone());
        Ok(todo)
    }

    /// Overwrite name and completion flag. Returns the updated item, or None if absent.
    pub fn update(&self, id: i64, input: TodoInput) -> Result<Option<Todo>, AppError> {
        let mut guard = self.write()?;
        Ok(guard.items.get_mut(&id).map(|todo| {
            todo.apply(input);
            todo.clone()
        }))
    }

    pub fn remove(&self, id: i64) -> Result<Option<Todo>, AppError> {
        Ok(self.write()?.items.remove(&id))
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.items.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, done: bool) -> TodoInput {
        TodoInput {
            name: Some(name.into()),
            is_complete: done,
        }
    }

    #[test]
    fn add_assigns_increasing_ids() {
        let store = TodoStore::new();
        let a = store.add(input("a", false)).unwrap();
        let b = store.add(input("b", true)).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.all().unwrap(), vec![a, b]);
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let store = TodoStore::new();
        let a = store.add(input("a", false)).unwrap();
        assert_eq!(store.remove(a.id).unwrap(), Some(a));
        let b = store.add(input("b", false)).unwrap();
        assert_eq!(b.id, 2);
    }

    #[test]
    fn completed_filters_on_flag() {
        let store = TodoStore::new();
        store.add(input("a", true)).unwrap();
        store.add(input("b", false)).unwrap();
        store.add(input("c", true)).unwrap();
        let names: Vec<_> = store
            .completed()
            .unwrap()
            .into_iter()
            .filter_map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn update_missing_leaves_store_unchanged() {
        let store = TodoStore::new();
        let a = store.add(input("a", false)).unwrap();
        assert_eq!(store.update(42, input("z", true)).unwrap(), None);
        assert_eq!(store.all().unwrap(), vec![a]);
    }

    #[test]
    fn update_overwrites_all_fields() {
        let store = TodoStore::new();
        let a = store.add(input("a", false)).unwrap();
        let updated = store
            .update(
                a.id,
                TodoInput {
                    name: None,
                    is_complete: true,
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, None);
        assert!(updated.is_complete);
        assert_eq!(store.find(a.id).unwrap(), Some(updated));
    }

    #[test]
    fn clones_share_state() {
        let store = TodoStore::new();
        let other = store.clone();
        store.add(input("a", false)).unwrap();
        assert_eq!(other.len().unwrap(), 1);
        assert!(!other.is_empty().unwrap());
    }
}
