//! TodoService: CRUD over the in-memory store.

mod todo;
pub use todo::TodoService;
