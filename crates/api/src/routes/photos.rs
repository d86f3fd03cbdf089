//! Photo upload and retrieval routes.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::SecondsFormat;
use fotoboo_core::photo::PhotoError;
use fotoboo_shared::{AppError, PhotoId};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::AppState;

const SAVE_FAILED: &str = "failed to save photo";
const RETRIEVE_FAILED: &str = "failed to retrieve photo";

/// Creates the photo routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/photos", post(upload_photo))
        .route("/photos/", get(missing_photo_id))
        .route("/photos/{id}", get(get_photo))
        .route("/photos/{id}/{*rest}", get(unknown_photo))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response for a stored photo.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Photo ID.
    pub id: String,
    /// Upload time (RFC 3339, second precision).
    pub created_at: String,
}

/// Body of every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Public error message.
    pub error: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build a `{"error": message}` response.
pub(crate) fn json_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    json_error(status, err.message())
}

/// Map a photo error, replacing storage details with `failure`.
fn photo_error_response(err: PhotoError, failure: &str) -> Response {
    if err.is_storage() {
        error!(error = %err, failure, "Photo storage operation failed");
        return error_response(&AppError::Internal(failure.to_string()));
    }
    error_response(&err.into())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/photos`
/// Store the raw request body as a new photo.
async fn upload_photo(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(error = %rejection, "Failed to read upload body");
            return error_response(&AppError::Validation(
                "failed to read request body".to_string(),
            ));
        }
    };

    let size = body.len();
    let service = state.photos.clone();
    let result = tokio::task::spawn_blocking(move || service.upload_photo(&body)).await;

    match result {
        Ok(Ok(photo)) => {
            info!(photo_id = %photo.id, size, "Photo uploaded");

            let response = UploadResponse {
                id: photo.id.to_string(),
                created_at: photo.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Ok(Err(err)) => photo_error_response(err, SAVE_FAILED),
        Err(err) => {
            error!(error = %err, "Upload task failed");
            error_response(&AppError::Internal(SAVE_FAILED.to_string()))
        }
    }
}

/// GET `/photos/{id}`
/// Stream back the stored bytes as a JPEG.
async fn get_photo(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    // Anything that is not a UUID was never issued.
    let Ok(id) = id.parse::<PhotoId>() else {
        return error_response(&AppError::NotFound("photo not found".to_string()));
    };

    let service = state.photos.clone();
    let result = tokio::task::spawn_blocking(move || service.get_photo_data(&id)).await;

    match result {
        Ok(Ok((photo, data))) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "image/jpeg".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("inline; filename=\"{}\"", photo.file_name()),
                ),
            ],
            data,
        )
            .into_response(),
        Ok(Err(err)) => photo_error_response(err, RETRIEVE_FAILED),
        Err(err) => {
            error!(error = %err, "Retrieve task failed");
            error_response(&AppError::Internal(RETRIEVE_FAILED.to_string()))
        }
    }
}

/// GET `/photos/`
async fn missing_photo_id() -> Response {
    error_response(&AppError::Validation("photo id is required".to_string()))
}

/// GET `/photos/{id}/...`
/// The whole suffix is the id, and no id contains a slash.
async fn unknown_photo() -> Response {
    error_response(&AppError::NotFound("photo not found".to_string()))
}
