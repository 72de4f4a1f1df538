//! Lambda hosting: API Gateway events are fed to the same router the HTTP server uses.
//!
//! `lambda_http` prefixes the request path with `/{stage}` for named API Gateway stages
//! (REST and HTTP APIs alike). The router only knows the unprefixed paths, so the stage
//! segment is removed before routing.

use axum::Router;
use lambda_http::http::Uri;
use lambda_http::request::RequestContext;
use lambda_http::{Request, RequestExt};
use tower::util::MapRequest;

/// Router wrapped with stage stripping; hand it to `lambda_http::run`.
pub type LambdaApp = MapRequest<Router, fn(Request) -> Request>;

pub fn lambda_app(app: Router) -> LambdaApp {
    MapRequest::new(app, strip_stage as fn(Request) -> Request)
}

/// Rewrites `/{stage}/api/todos?x` to `/api/todos?x` when the event carries a named stage.
pub fn strip_stage(mut req: Request) -> Request {
    let stage = match req.request_context_ref() {
        Some(RequestContext::ApiGatewayV1(ctx)) => ctx.stage.clone(),
        Some(RequestContext::ApiGatewayV2(ctx)) => ctx.stage.clone(),
        _ => None,
    };
    let Some(stage) = stage else {
        return req;
    };
    let Some(rest) = strip_stage_prefix(req.uri().path(), &stage) else {
        return req;
    };
    let path_and_query = match req.uri().query() {
        Some(q) => format!("{rest}?{q}"),
        None => rest.to_string(),
    };

    let mut parts = req.uri().clone().into_parts();
    match path_and_query.parse() {
        Ok(pq) => parts.path_and_query = Some(pq),
        Err(e) => {
            tracing::warn!(error = %e, "could not rewrite staged path");
            return req;
        }
    }
    match Uri::from_parts(parts) {
        Ok(uri) => {
            tracing::debug!(stage = %stage, path = %uri.path(), "stripped stage from path");
            *req.uri_mut() = uri;
        }
        Err(e) => tracing::warn!(error = %e, "could not rewrite staged path"),
    }
    req
}

/// Path with the leading `/{stage}` segment removed; None when the path is not staged.
fn strip_stage_prefix<'a>(path: &'a str, stage: &str) -> Option<&'a str> {
    if stage.is_empty() || stage == "$default" {
        return None;
    }
    match path.strip_prefix('/')?.strip_prefix(stage)? {
        "" => Some("/"),
        rest if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_named_stage_segment() {
        assert_eq!(strip_stage_prefix("/prod/api/todos", "prod"), Some("/api/todos"));
        assert_eq!(strip_stage_prefix("/prod", "prod"), Some("/"));
        assert_eq!(strip_stage_prefix("/prod/", "prod"), Some("/"));
    }

    #[test]
    fn leaves_unstaged_paths_alone() {
        assert_eq!(strip_stage_prefix("/api/todos", "$default"), None);
        assert_eq!(strip_stage_prefix("/api/todos", "prod"), None);
        assert_eq!(strip_stage_prefix("/production/api", "prod"), None);
        assert_eq!(strip_stage_prefix("/api/todos", ""), None);
    }

    #[test]
    fn request_without_context_is_unchanged() {
        let req = lambda_http::http::Request::builder()
            .uri("/prod/api/todos")
            .body(lambda_http::Body::Empty)
            .unwrap();
        let req = strip_stage(req);
        assert_eq!(req.uri().path(), "/prod/api/todos");
    }
}
