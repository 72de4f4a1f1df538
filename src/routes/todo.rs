//! Todo routes under `/api/todos`.

use crate::handlers::todo::{create, delete as delete_handler, list, list_completed, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Base path of the todo collection; also used to build `Location` headers.
pub const TODOS_PATH: &str = "/api/todos";

pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route(TODOS_PATH, get(list).post(create))
        .route(&format!("{TODOS_PATH}/complete"), get(list_completed))
        .route(
            &format!("{TODOS_PATH}/:id"),
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
