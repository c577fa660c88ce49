//! Domain layer containing the mapping entity and the seams around it.
//!
//! This module has no knowledge of HTTP, SQL, or DNS. It defines the data the
//! service stores and the traits the infrastructure layer implements.
//!
//! # Architecture
//!
//! - [`entities`] - The mapping record
//! - [`repositories`] - Mapping store trait definition
//! - [`resolver`] - Host name resolution trait used by URL validation
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod resolver;
