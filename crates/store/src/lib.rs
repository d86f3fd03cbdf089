//! Storage layer for FotoBoo.
//!
//! This crate provides:
//! - A disk-backed implementation of the core `PhotoRepository` trait
//! - The metadata index file format (a JSON array of photo records)

pub mod repositories;

pub use repositories::FilePhotoRepository;
