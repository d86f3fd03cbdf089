//! Disk-backed photo repository.
//!
//! # Layout
//!
//! ```text
//! <base>/
//! ├── metadata.json      # JSON array of every photo record
//! ├── <id>.jpg           # one blob per record
//! └── ...
//! ```
//!
//! # Consistency
//!
//! A blob is always written before its record is published. One reader/writer
//! lock guards both the in-memory index and the rewrite of `metadata.json`, so
//! concurrent saves serialize only on the index rewrite, never on blob I/O.
//! Every save rewrites the whole index file, which is O(n) in the number of
//! stored photos.
//!
//! If the index rewrite fails the blob stays on disk without a record. It is
//! not cleaned up.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use fotoboo_core::photo::{Photo, PhotoError, PhotoRepository};
use fotoboo_shared::PhotoId;
use fotoboo_shared::config::metadata_path;
use tracing::{debug, error, info, warn};

/// Scratch file the index is written to before being renamed into place.
const METADATA_TMP_FILE_NAME: &str = "metadata.json.tmp";

type Index = HashMap<PhotoId, Photo>;

/// Photo repository storing blobs as files and records in a JSON index.
#[derive(Debug)]
pub struct FilePhotoRepository {
    base_path: PathBuf,
    index: RwLock<Index>,
}

impl FilePhotoRepository {
    /// Open the repository rooted at `base_path`.
    ///
    /// Creates the directory if needed and loads `metadata.json`. A missing
    /// index starts empty; an unreadable or corrupt one also starts empty but
    /// is reported with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(base_path: impl Into<PathBuf>) -> Result<Self, PhotoError> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path)?;

        let index = load_index(&metadata_path(&base_path));

        info!(
            path = %base_path.display(),
            records = index.len(),
            "Opened photo store"
        );

        Ok(Self {
            base_path,
            index: RwLock::new(index),
        })
    }

    /// Root directory of the store.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Location of the metadata index file.
    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        metadata_path(&self.base_path)
    }

    /// Number of indexed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True when no record is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize the whole index and move it over `metadata.json`.
    ///
    /// Callers must hold the write lock.
    fn write_index(&self, index: &Index) -> Result<(), PhotoError> {
        let mut photos: Vec<&Photo> = index.values().collect();
        photos.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let json = serde_json::to_vec_pretty(&photos)?;

        let tmp_path = self.base_path.join(METADATA_TMP_FILE_NAME);
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, self.metadata_path())?;

        Ok(())
    }
}

impl PhotoRepository for FilePhotoRepository {
    fn save(&self, mut photo: Photo, data: &[u8]) -> Result<Photo, PhotoError> {
        if data.is_empty() {
            return Err(PhotoError::InvalidData);
        }

        let path = self.base_path.join(photo.file_name());
        fs::write(&path, data)?;
        photo.file_path = path;

        debug!(
            photo_id = %photo.id,
            size = data.len(),
            path = %photo.file_path.display(),
            "Wrote photo blob"
        );

        let mut index = self.index.write().unwrap_or_else(PoisonError::into_inner);
        let previous = index.insert(photo.id, photo.clone());

        if let Err(err) = self.write_index(&index) {
            match previous {
                Some(previous) => index.insert(photo.id, previous),
                None => index.remove(&photo.id),
            };
            error!(
                photo_id = %photo.id,
                error = %err,
                "Failed to rewrite metadata index, blob left orphaned"
            );
            return Err(err);
        }

        Ok(photo)
    }

    fn find_by_id(&self, id: &PhotoId) -> Result<Photo, PhotoError> {
        self.index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| PhotoError::not_found(*id))
    }

    fn file_data(&self, photo: &Photo) -> Result<Vec<u8>, PhotoError> {
        Ok(fs::read(&photo.file_path)?)
    }
}

/// Read the metadata index, tolerating a missing or damaged file.
fn load_index(path: &Path) -> Index {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No metadata index yet, starting empty");
            return Index::new();
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "Cannot read metadata index, starting empty"
            );
            return Index::new();
        }
    };

    match serde_json::from_slice::<Vec<Photo>>(&bytes) {
        Ok(photos) => photos.into_iter().map(|photo| (photo.id, photo)).collect(),
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "Corrupt metadata index discarded, starting empty"
            );
            Index::new()
        }
    }
}
