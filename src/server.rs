//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, database connections, migrations, and the Axum
//! server lifecycle.

use crate::application::services::MappingService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::MappingStore;
use crate::domain::resolver::HostResolver;
use crate::infrastructure::dns::SystemResolver;
use crate::infrastructure::persistence::{MemoryMappingStore, PgMappingStore};
use crate::routes::{StaticAssets, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping store (PostgreSQL with migrations, or in-memory)
/// - System DNS resolver
/// - Mapping service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    let resolver: Arc<dyn HostResolver> = Arc::new(SystemResolver::new());

    let mapping_service = MappingService::new(store, resolver)
        .with_allocation_retries(config.allocation_retries);
    let state = AppState::new(Arc::new(mapping_service));

    let app = app_router(state, &StaticAssets::from_config(&config));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens a PostgreSQL pool using the configured pool settings.
///
/// # Errors
///
/// Returns an error if the memory backend is selected, no database URL is
/// configured, or the connection fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config.require_database_url()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

async fn build_store(config: &Config) -> Result<Arc<dyn MappingStore>> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = connect_pool(config).await?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to apply migrations")?;
            tracing::info!("Migrations applied");

            Ok(Arc::new(PgMappingStore::new(Arc::new(pool))))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store; mappings are lost on restart");
            Ok(Arc::new(MemoryMappingStore::new()))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
