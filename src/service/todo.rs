//! Todo operations against the in-memory store.

use crate::error::AppError;
use crate::model::{Todo, TodoInput};
use crate::store::TodoStore;

pub struct TodoService;

impl TodoService {
    /// Every stored todo in ascending id order.
    pub fn list(store: &TodoStore) -> Result<Vec<Todo>, AppError> {
        let rows = store.all()?;
        tracing::debug!(count = rows.len(), "list todos");
        Ok(rows)
    }

    pub fn list_completed(store: &TodoStore) -> Result<Vec<Todo>, AppError> {
        let rows = store.completed()?;
        tracing::debug!(count = rows.len(), "list completed todos");
        Ok(rows)
    }

    pub fn read(store: &TodoStore, id: i64) -> Result<Todo, AppError> {
        tracing::debug!(id, "read todo");
        store.find(id)?.ok_or(AppError::NotFound(id))
    }

    pub fn create(store: &TodoStore, input: TodoInput) -> Result<Todo, AppError> {
        let todo = store.add(input)?;
        tracing::debug!(id = todo.id, "created todo");
        Ok(todo)
    }

    /// Full replacement of name and completion flag.
    pub fn update(store: &TodoStore, id: i64, input: TodoInput) -> Result<Todo, AppError> {
        tracing::debug!(id, "update todo");
        store.update(id, input)?.ok_or(AppError::NotFound(id))
    }

    /// Remove and return the todo.
    pub fn delete(store: &TodoStore, id: i64) -> Result<Todo, AppError> {
        tracing::debug!(id, "delete todo");
        store.remove(id)?.ok_or(AppError::NotFound(id))
    }
}
