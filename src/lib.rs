//! Todo API: CRUD over an in-memory todo list, with OpenAPI docs and optional Lambda hosting.

pub mod app;
pub mod error;
pub mod handlers;
pub mod lambda;
pub mod model;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use app::build_app;
pub use error::{AppError, ConfigError};
pub use lambda::{lambda_app, LambdaApp};
pub use model::{Todo, TodoInput};
pub use routes::{common_routes, docs_routes, todo_routes, ApiDoc};
pub use service::TodoService;
pub use settings::{Hosting, LogFormat, Settings};
pub use state::AppState;
pub use store::TodoStore;
