//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::MappingRecord;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// PostgreSQL store backed by the `url_mappings` table.
///
/// Both columns carry unique constraints, so a losing concurrent insert
/// fails with a unique violation that maps to [`AppError::DuplicateKey`].
pub struct PgMappingStore {
    pool: Arc<PgPool>,
}

impl PgMappingStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MappingRow {
    original_url: String,
    short_id: i64,
}

impl From<MappingRow> for MappingRecord {
    fn from(row: MappingRow) -> Self {
        MappingRecord::new(row.original_url, row.short_id)
    }
}

#[async_trait]
impl MappingStore for PgMappingStore {
    async fn find_by_original_url(&self, url: &str) -> Result<Option<MappingRecord>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT original_url, short_id
            FROM url_mappings
            WHERE original_url = $1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(MappingRecord::from))
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<MappingRecord>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT original_url, short_id
            FROM url_mappings
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(MappingRecord::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn insert(&self, record: MappingRecord) -> Result<MappingRecord, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO url_mappings (original_url, short_id)
            VALUES ($1, $2)
            RETURNING original_url, short_id
            "#,
        )
        .bind(&record.original_url)
        .bind(record.short_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
