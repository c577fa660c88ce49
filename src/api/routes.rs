//! API route configuration.

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`                 - Greeting
/// - `POST /shorturl`              - Submit a URL
/// - `GET  /shorturl/{short_url}`  - Redirect to the original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
}
