//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into [`crate::application`] calls and
//! formats responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Request body extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing and CORS
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
