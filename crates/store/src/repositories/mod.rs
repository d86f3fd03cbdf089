//! Repository implementations.
//!
//! Repositories provide a clean interface for persistence,
//! hiding the on-disk layout from the rest of the application.

pub mod photo;

pub use photo::FilePhotoRepository;
