//! Photo service implementation.

use std::sync::Arc;

use fotoboo_shared::PhotoId;

use super::error::PhotoError;
use super::types::Photo;

/// Repository trait for photo persistence.
///
/// Implemented by the store crate. Every method is synchronous and may block
/// on disk I/O; async callers should move calls onto a blocking pool.
pub trait PhotoRepository: Send + Sync {
    /// Persist the blob, then publish the record in the index.
    ///
    /// Returns the stored record with `file_path` populated.
    fn save(&self, photo: Photo, data: &[u8]) -> Result<Photo, PhotoError>;

    /// Look up a record by identifier.
    fn find_by_id(&self, id: &PhotoId) -> Result<Photo, PhotoError>;

    /// Read the blob bytes for a record.
    fn file_data(&self, photo: &Photo) -> Result<Vec<u8>, PhotoError>;
}

/// Photo service for uploading and retrieving photos.
pub struct PhotoService<R: PhotoRepository> {
    repo: Arc<R>,
}

impl<R: PhotoRepository> Clone for PhotoService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: PhotoRepository> PhotoService<R> {
    /// Create a new photo service.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Store a new photo under a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` for an empty payload, otherwise whatever the
    /// repository reports.
    pub fn upload_photo(&self, data: &[u8]) -> Result<Photo, PhotoError> {
        if data.is_empty() {
            return Err(PhotoError::InvalidData);
        }

        self.repo.save(Photo::new(), data)
    }

    /// Fetch a photo record without its blob.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the identifier was never stored.
    pub fn get_photo(&self, id: &PhotoId) -> Result<Photo, PhotoError> {
        self.repo.find_by_id(id)
    }

    /// Fetch a photo record together with its blob bytes.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` before touching the disk if the identifier is
    /// unknown; I/O errors if the blob cannot be read.
    pub fn get_photo_data(&self, id: &PhotoId) -> Result<(Photo, Vec<u8>), PhotoError> {
        let photo = self.repo.find_by_id(id)?;
        let data = self.repo.file_data(&photo)?;
        Ok((photo, data))
    }
}
