//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for serialization; request DTOs additionally use
//! validator for input validation.

pub mod hello;
pub mod shorten;
