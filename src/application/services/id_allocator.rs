//! Sequential short id allocation.

use std::sync::Arc;

use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Allocates the next short id as `count() + 1`.
///
/// Two concurrent allocations can observe the same count and return the
/// same id. The store's unique constraint on `short_id` turns that into a
/// [`AppError::DuplicateKey`] on insert; see
/// [`crate::application::services::MappingService`] for the retry.
pub struct CountingAllocator<S: MappingStore + ?Sized> {
    store: Arc<S>,
}

impl<S: MappingStore + ?Sized> CountingAllocator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the id for the next record.
    ///
    /// # Errors
    ///
    /// Propagates storage errors from [`MappingStore::count`].
    pub async fn next_id(&self) -> Result<i64, AppError> {
        let count = self.store.count().await?;
        Ok(count + 1)
    }
}
