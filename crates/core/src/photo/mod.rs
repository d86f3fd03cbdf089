//! Photo upload and retrieval.
//!
//! This module provides business logic for photos including:
//! - Upload validation (non-empty payloads only)
//! - Identifier assignment
//! - Lookup of records and their blob data

mod error;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use error::PhotoError;
pub use service::{PhotoRepository, PhotoService};
pub use types::Photo;
