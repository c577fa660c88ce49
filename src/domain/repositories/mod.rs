//! Repository trait definitions for the domain layer.
//!
//! This module defines the storage interface that abstracts data access
//! following the Repository pattern. Implementations live in
//! `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`MappingStore`] - Write-once URL to short id mappings
//!
//! # Testing
//!
//! A mock implementation is auto-generated via `mockall` under `cfg(test)`.
//! See `tests/repository_mapping.rs` for the PostgreSQL implementation.

pub mod mapping_store;

pub use mapping_store::{MappingStore, ORIGINAL_URL_CONSTRAINT, SHORT_ID_CONSTRAINT};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
