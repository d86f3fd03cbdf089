//! Photo error types.

use fotoboo_shared::{AppError, PhotoId};
use thiserror::Error;

/// Photo operation errors.
#[derive(Debug, Error)]
pub enum PhotoError {
    /// Upload payload was empty.
    #[error("invalid photo data")]
    InvalidData,

    /// No record exists for the identifier.
    #[error("photo not found: {0}")]
    NotFound(PhotoId),

    /// Blob or metadata file operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata index could not be encoded.
    #[error("metadata serialization failed: {0}")]
    Metadata(#[from] serde_json::Error),
}

impl PhotoError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(id: PhotoId) -> Self {
        Self::NotFound(id)
    }

    /// True for failures of the storage layer, as opposed to bad requests.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Metadata(_))
    }
}

impl From<PhotoError> for AppError {
    fn from(err: PhotoError) -> Self {
        match err {
            PhotoError::InvalidData => Self::Validation("invalid photo data".to_string()),
            PhotoError::NotFound(_) => Self::NotFound("photo not found".to_string()),
            PhotoError::Io(_) | PhotoError::Metadata(_) => {
                Self::Internal("storage failure".to_string())
            }
        }
    }
}
