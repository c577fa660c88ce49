//! Core domain entities.
//!
//! The service stores exactly one kind of record:
//!
//! - [`MappingRecord`] - An original URL and the sequential id assigned to it

pub mod mapping;

pub use mapping::MappingRecord;
