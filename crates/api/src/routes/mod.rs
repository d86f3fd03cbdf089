//! API route definitions.

use axum::Router;
use axum::http::StatusCode;
use axum::response::Response;

use crate::AppState;

pub mod health;
pub mod photos;

/// Creates the API router with all routes.
///
/// Wrong methods on a known path and unknown paths still answer with a JSON
/// error body.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(photos::routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

async fn method_not_allowed() -> Response {
    photos::json_error(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}

async fn not_found() -> Response {
    photos::json_error(StatusCode::NOT_FOUND, "not found")
}
