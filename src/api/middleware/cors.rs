//! Cross-origin resource sharing.

use tower_http::cors::CorsLayer;

/// Allows requests from any origin with any method and headers.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
