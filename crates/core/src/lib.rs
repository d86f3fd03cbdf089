//! Core photo domain logic for FotoBoo.
//!
//! This crate contains the photo record type, the repository contract the
//! storage engine fulfils, and the service that validates uploads and assigns
//! identifiers. It has ZERO web or filesystem-layout dependencies.
//!
//! # Modules
//!
//! - `photo` - Photo records, errors, repository trait, and service

pub mod photo;
