//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Landing page (`views/index.html`)
//! - `GET  /health`   - Health check
//! - `/api/*`         - URL submission and redirect API
//! - `/public/*`      - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin
//! - **Path normalization** - Trailing slash handling

use std::path::PathBuf;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Filesystem locations of the landing page and static assets.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    pub public_dir: PathBuf,
    pub views_dir: PathBuf,
}

impl StaticAssets {
    pub fn from_config(config: &Config) -> Self {
        Self {
            public_dir: PathBuf::from(&config.public_dir),
            views_dir: PathBuf::from(&config.views_dir),
        }
    }
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, assets: &StaticAssets) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new(assets.views_dir.join("index.html")))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/public", ServeDir::new(&assets.public_dir))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
