//! Photo record types.

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Local};
use fotoboo_shared::PhotoId;
use serde::{Deserialize, Serialize};

/// File extension used for every stored blob.
const PHOTO_EXTENSION: &str = "jpg";

/// Metadata describing one stored photo.
///
/// Records are immutable once saved; `id` is the sole lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Unique identifier.
    pub id: PhotoId,
    /// Location of the blob file. Empty until the record is saved.
    pub file_path: PathBuf,
    /// When the photo was uploaded, in the server's local offset.
    pub created_at: DateTime<FixedOffset>,
}

impl Photo {
    /// Create an unsaved record with a fresh identifier and the current time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(PhotoId::new())
    }

    /// Create an unsaved record for a known identifier.
    #[must_use]
    pub fn with_id(id: PhotoId) -> Self {
        Self {
            id,
            file_path: PathBuf::new(),
            created_at: Local::now().fixed_offset(),
        }
    }

    /// Blob file name for this record: `<id>.jpg`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{PHOTO_EXTENSION}", self.id)
    }
}

impl Default for Photo {
    fn default() -> Self {
        Self::new()
    }
}
