//! Todo CRUD handlers: list, list completed, read, create, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::model::{Todo, TodoInput};
use crate::routes::TODOS_PATH;
use crate::service::TodoService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    get,
    path = "/api/todos",
    tag = "todos",
    responses((status = 200, description = "All todos", body = [Todo]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    Ok(Json(TodoService::list(&state.store)?))
}

#[utoipa::path(
    get,
    path = "/api/todos/complete",
    tag = "todos",
    responses((status = 200, description = "Todos with isComplete set", body = [Todo]))
)]
pub async fn list_completed(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    Ok(Json(TodoService::list_completed(&state.store)?))
}

#[utoipa::path(
    get,
    path = "/api/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The todo", body = Todo),
        (status = 404, description = "No todo with this id", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    Ok(Json(TodoService::read(&state.store, id)?))
}

#[utoipa::path(
    post,
    path = "/api/todos",
    tag = "todos",
    request_body = TodoInput,
    responses(
        (status = 201, description = "Created", body = Todo,
            headers(("location" = String, description = "URL of the new todo")))
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<TodoInput>,
) -> Result<impl IntoResponse, AppError> {
    let todo = TodoService::create(&state.store, input)?;
    let location = format!("{}/{}", TODOS_PATH, todo.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(todo)))
}

#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo id")),
    request_body = TodoInput,
    responses(
        (status = 204, description = "Updated"),
        (status = 404, description = "No todo with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<TodoInput>,
) -> Result<StatusCode, AppError> {
    TodoService::update(&state.store, id, input)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The deleted todo", body = Todo),
        (status = 404, description = "No todo with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    Ok(Json(TodoService::delete(&state.store, id)?))
}
