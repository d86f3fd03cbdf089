//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for photo upload and retrieval
//! - The health check endpoint
//! - Request tracing, CORS, and the upload body limit

pub mod routes;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{Method, header};
use fotoboo_core::photo::PhotoService;
use fotoboo_store::FilePhotoRepository;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Photo service backed by the disk store.
    pub photos: PhotoService<FilePhotoRepository>,
    /// Largest accepted upload body in bytes.
    pub max_upload_bytes: usize,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes;

    Router::new()
        .merge(routes::api_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(state)
}
