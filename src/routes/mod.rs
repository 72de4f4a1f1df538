//! Route registration: todos, common probes, and API docs.

mod common;
mod docs;
mod todo;

pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc, DOCS_PATH, OPENAPI_JSON_PATH};
pub use todo::{todo_routes, TODOS_PATH};
