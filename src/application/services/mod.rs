//! Business logic services for the application layer.

pub mod host_validator;
pub mod id_allocator;
pub mod mapping_service;

pub use host_validator::{HostRejection, HostValidator};
pub use id_allocator::CountingAllocator;
pub use mapping_service::{DEFAULT_ALLOCATION_RETRIES, MappingService};

use crate::domain::repositories::MappingStore;
use crate::domain::resolver::HostResolver;

/// Mapping service over trait objects, as held by [`crate::state::AppState`].
pub type DynMappingService = MappingService<dyn MappingStore, dyn HostResolver>;
