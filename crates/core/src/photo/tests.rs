//! Service-level tests against an in-memory repository.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use fotoboo_shared::{AppError, PhotoId};
use proptest::prelude::*;
use rstest::rstest;

use super::{Photo, PhotoError, PhotoRepository, PhotoService};

/// Keeps records and blobs in maps; can be told to fail blob reads or saves.
#[derive(Default)]
struct InMemoryRepository {
    records: Mutex<HashMap<PhotoId, (Photo, Vec<u8>)>>,
    save_calls: AtomicUsize,
    read_calls: AtomicUsize,
    fail_reads: bool,
    fail_saves: bool,
}

impl InMemoryRepository {
    fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }
}

impl PhotoRepository for InMemoryRepository {
    fn save(&self, mut photo: Photo, data: &[u8]) -> Result<Photo, PhotoError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves {
            return Err(std::io::Error::other("disk full").into());
        }
        photo.file_path = PathBuf::from("mem").join(photo.file_name());
        self.records
            .lock()
            .unwrap()
            .insert(photo.id, (photo.clone(), data.to_vec()));
        Ok(photo)
    }

    fn find_by_id(&self, id: &PhotoId) -> Result<Photo, PhotoError> {
        self.records
            .lock()
            .unwrap()
            .get(id)
            .map(|(photo, _)| photo.clone())
            .ok_or(PhotoError::NotFound(*id))
    }

    fn file_data(&self, photo: &Photo) -> Result<Vec<u8>, PhotoError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(std::io::Error::from(std::io::ErrorKind::NotFound).into());
        }
        Ok(self.records.lock().unwrap()[&photo.id].1.clone())
    }
}

fn build_service(
    repo: InMemoryRepository,
) -> (PhotoService<InMemoryRepository>, Arc<InMemoryRepository>) {
    let repo = Arc::new(repo);
    (PhotoService::new(Arc::clone(&repo)), repo)
}

#[test]
fn test_upload_empty_is_rejected_before_repository() {
    let (service, repo) = build_service(InMemoryRepository::default());

    let err = service.upload_photo(&[]).unwrap_err();

    assert!(matches!(err, PhotoError::InvalidData));
    assert_eq!(repo.save_calls.load(Ordering::SeqCst), 0);
    assert!(repo.records.lock().unwrap().is_empty());
}

#[test]
fn test_upload_assigns_v4_id_and_path() {
    let (service, _repo) = build_service(InMemoryRepository::default());

    let photo = service.upload_photo(&[1, 2, 3]).unwrap();

    assert_eq!(photo.id.into_inner().get_version_num(), 4);
    assert_eq!(
        photo.file_path,
        PathBuf::from("mem").join(format!("{}.jpg", photo.id))
    );
}

#[test]
fn test_upload_propagates_repository_error() {
    let (service, repo) = build_service(InMemoryRepository::failing_saves());

    let err = service.upload_photo(&[9]).unwrap_err();

    assert!(matches!(err, PhotoError::Io(_)));
    assert_eq!(repo.save_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_get_photo_data_unknown_id_skips_blob_read() {
    let (service, repo) = build_service(InMemoryRepository::default());

    let err = service.get_photo_data(&PhotoId::new()).unwrap_err();

    assert!(matches!(err, PhotoError::NotFound(_)));
    assert_eq!(repo.read_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_get_photo_data_surfaces_read_failure() {
    let (service, _repo) = build_service(InMemoryRepository::failing_reads());
    let photo = service.upload_photo(b"jpeg").unwrap();

    let err = service.get_photo_data(&photo.id).unwrap_err();

    assert!(matches!(err, PhotoError::Io(_)));
}

#[test]
fn test_get_photo_returns_metadata() {
    let (service, _repo) = build_service(InMemoryRepository::default());
    let stored = service.upload_photo(b"jpeg").unwrap();

    let found = service.get_photo(&stored.id).unwrap();

    assert_eq!(found, stored);
}

#[test]
fn test_photo_file_name() {
    let photo = Photo::new();
    assert_eq!(photo.file_name(), format!("{}.jpg", photo.id));
    assert!(photo.file_path.as_os_str().is_empty());
}

#[rstest]
#[case(PhotoError::InvalidData, 400, "invalid photo data")]
#[case(PhotoError::NotFound(PhotoId::new()), 404, "photo not found")]
#[case(PhotoError::Io(std::io::Error::other("disk full")), 500, "storage failure")]
fn test_photo_error_to_app_error(
    #[case] err: PhotoError,
    #[case] status: u16,
    #[case] message: &str,
) {
    let storage = err.is_storage();
    let app: AppError = err.into();
    assert_eq!(app.status_code(), status);
    assert_eq!(app.message(), message);
    assert_eq!(storage, status == 500);
}

proptest! {
    /// Any non-empty payload reads back byte-for-byte.
    #[test]
    fn prop_upload_then_get_returns_same_bytes(
        data in proptest::collection::vec(any::<u8>(), 1..2048),
    ) {
        let (service, _repo) = build_service(InMemoryRepository::default());

        let photo = service.upload_photo(&data).unwrap();
        let (found, bytes) = service.get_photo_data(&photo.id).unwrap();

        prop_assert_eq!(found, photo);
        prop_assert_eq!(bytes, data);
    }
}
