//! Repository trait for mapping record storage.

use crate::domain::entities::MappingRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Name of the unique constraint on `original_url`.
pub const ORIGINAL_URL_CONSTRAINT: &str = "url_mappings_original_url_key";

/// Name of the unique constraint on `short_id`.
pub const SHORT_ID_CONSTRAINT: &str = "url_mappings_short_id_key";

/// Durable store of URL to short id mappings.
///
/// Implementations must enforce uniqueness of both `original_url` and
/// `short_id` themselves. Callers do not pre-check before [`Self::insert`];
/// the store is the only thing that serializes concurrent inserts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Finds a record by its original URL.
    ///
    /// Matching is exact: no case folding, no trailing slash or scheme
    /// handling.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_original_url(&self, url: &str) -> Result<Option<MappingRecord>, AppError>;

    /// Finds a record by its short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<MappingRecord>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Persists a new record and returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if either the URL or the short id
    /// is already stored. Nothing is written in that case.
    ///
    /// Returns [`AppError::Internal`] on other storage errors.
    async fn insert(&self, record: MappingRecord) -> Result<MappingRecord, AppError>;
}
