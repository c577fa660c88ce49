//! Mapping store implementations.
//!
//! # Stores
//!
//! - [`PgMappingStore`] - PostgreSQL via SQLx, uniqueness enforced by unique constraints
//! - [`MemoryMappingStore`] - In-process store, uniqueness enforced under a single write lock

pub mod memory_mapping_store;
pub mod pg_mapping_store;

pub use memory_mapping_store::MemoryMappingStore;
pub use pg_mapping_store::PgMappingStore;
