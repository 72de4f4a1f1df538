//! HTTP handlers for the todo collection.

pub mod todo;
pub use todo::*;
