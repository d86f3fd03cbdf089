//! Shared types, errors, and configuration for FotoBoo.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for photo records
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ServerConfig, StorageConfig};
pub use error::AppError;
pub use types::PhotoId;
