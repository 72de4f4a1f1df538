//! Router assembly shared by the HTTP server and the Lambda entry point.

use crate::routes::{common_routes, docs_routes, todo_routes};
use crate::settings::Settings;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Mounts todo and common routes, plus docs when enabled, behind tracing and a body limit.
pub fn build_app(state: AppState, settings: &Settings) -> Router {
    let mut app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(todo_routes(state));
    if settings.api_docs {
        app = app.merge(docs_routes());
    }
    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(settings.max_body_bytes)),
    )
}
