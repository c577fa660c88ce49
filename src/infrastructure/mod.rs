//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`dns`] - Host name resolution through the system resolver
//! - [`persistence`] - PostgreSQL and in-memory mapping stores

pub mod dns;
pub mod persistence;
