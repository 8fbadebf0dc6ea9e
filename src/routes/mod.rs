//! Route tables and the assembled application router.

mod api;
mod common;
pub use api::api_routes;
pub use common::common_routes;

use crate::error::ErrorBody;
use crate::state::AppState;
use axum::http::header::{ALLOW, CONTENT_TYPE};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies are never needed beyond small JSON payloads.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Rewrite error responses produced outside `AppError` (405 from routing, 413 from the
/// body limit) into the `{message, status_code}` body. JSON error bodies pass through.
async fn json_error_body(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);
    if is_json {
        return response;
    }
    let allow = response.headers().get(ALLOW).cloned();
    let mut rewritten = (status, Json(ErrorBody::for_status(status))).into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(ALLOW, allow);
    }
    rewritten
}

/// Full router: common routes plus the API, with tracing, body limits and JSON error bodies.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(map_response(json_error_body))
        .layer(TraceLayer::new_for_http())
}
