//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the mapping
//! store, host validation, and id allocation. HTTP handlers and the admin CLI
//! call into it.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - URL submission and short id resolution
//! - [`services::host_validator::HostValidator`] - Host resolvability check
//! - [`services::id_allocator::CountingAllocator`] - Sequential id allocation

pub mod services;
