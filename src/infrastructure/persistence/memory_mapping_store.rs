//! In-memory implementation of the mapping store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::MappingRecord;
use crate::domain::repositories::{MappingStore, ORIGINAL_URL_CONSTRAINT, SHORT_ID_CONSTRAINT};
use crate::error::AppError;

#[derive(Default)]
struct Indexes {
    by_url: HashMap<String, i64>,
    by_id: HashMap<i64, String>,
}

/// Process-local mapping store.
///
/// Both uniqueness checks and the write happen under one write guard, which
/// gives inserts the same all-or-nothing behavior as the PostgreSQL store.
/// Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryMappingStore {
    indexes: RwLock<Indexes>,
}

impl MemoryMappingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn find_by_original_url(&self, url: &str) -> Result<Option<MappingRecord>, AppError> {
        let indexes = self.indexes.read().await;

        Ok(indexes
            .by_url
            .get(url)
            .map(|&short_id| MappingRecord::new(url, short_id)))
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<MappingRecord>, AppError> {
        let indexes = self.indexes.read().await;

        Ok(indexes
            .by_id
            .get(&short_id)
            .map(|url| MappingRecord::new(url.as_str(), short_id)))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let indexes = self.indexes.read().await;
        Ok(indexes.by_id.len() as i64)
    }

    async fn insert(&self, record: MappingRecord) -> Result<MappingRecord, AppError> {
        let mut indexes = self.indexes.write().await;

        if indexes.by_url.contains_key(&record.original_url) {
            return Err(AppError::duplicate_key(Some(ORIGINAL_URL_CONSTRAINT)));
        }
        if indexes.by_id.contains_key(&record.short_id) {
            return Err(AppError::duplicate_key(Some(SHORT_ID_CONSTRAINT)));
        }

        indexes
            .by_url
            .insert(record.original_url.clone(), record.short_id);
        indexes
            .by_id
            .insert(record.short_id, record.original_url.clone());

        Ok(record)
    }
}
