//! Generated OpenAPI document and the interactive RapiDoc page.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::todo;
use crate::model::{Todo, TodoInput};
use axum::Router;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(title = "Todo API", description = "Minimal todo list CRUD API"),
    paths(
        todo::list,
        todo::list_completed,
        todo::read,
        todo::create,
        todo::update,
        todo::delete,
    ),
    components(schemas(Todo, TodoInput, ErrorBody, ErrorDetail)),
    tags((name = "todos", description = "Todo list management"))
)]
pub struct ApiDoc;

/// Serves the OpenAPI JSON at [`OPENAPI_JSON_PATH`] and RapiDoc at [`DOCS_PATH`].
pub fn docs_routes() -> Router {
    Router::new().merge(RapiDoc::with_openapi(OPENAPI_JSON_PATH, ApiDoc::openapi()).path(DOCS_PATH))
}
