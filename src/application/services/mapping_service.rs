//! Mapping submission and resolution service.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use crate::application::services::host_validator::HostValidator;
use crate::application::services::id_allocator::CountingAllocator;
use crate::domain::entities::MappingRecord;
use crate::domain::repositories::MappingStore;
use crate::domain::resolver::HostResolver;
use crate::error::AppError;

/// Default number of extra insert attempts after a lost allocation race.
pub const DEFAULT_ALLOCATION_RETRIES: usize = 3;

/// Service that assigns sequential short ids to URLs and resolves them back.
///
/// # Submission
///
/// 1. Validate the URL host (no record is touched on failure)
/// 2. Return the existing record if the URL was already submitted
/// 3. Allocate `count() + 1`
/// 4. Insert the new record
///
/// Steps 2-4 are re-run when the insert fails with a duplicate key, up to
/// `allocation_retries` times. With zero retries a lost race is returned
/// to the caller as a storage error.
pub struct MappingService<S: MappingStore + ?Sized, R: HostResolver + ?Sized> {
    store: Arc<S>,
    validator: HostValidator<R>,
    allocator: CountingAllocator<S>,
    allocation_retries: usize,
}

impl<S: MappingStore + ?Sized, R: HostResolver + ?Sized> MappingService<S, R> {
    /// Creates a new mapping service.
    pub fn new(store: Arc<S>, resolver: Arc<R>) -> Self {
        Self {
            allocator: CountingAllocator::new(store.clone()),
            validator: HostValidator::new(resolver),
            store,
            allocation_retries: DEFAULT_ALLOCATION_RETRIES,
        }
    }

    /// Sets how many times a lost allocation race is retried.
    pub fn with_allocation_retries(mut self, retries: usize) -> Self {
        self.allocation_retries = retries;
        self
    }

    pub fn validator(&self) -> &HostValidator<R> {
        &self.validator
    }

    /// Submits a URL and returns its mapping.
    ///
    /// Submitting the same URL again returns the original record; no second
    /// id is ever assigned to a URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL has no host or the host
    /// does not resolve.
    ///
    /// Returns [`AppError::DuplicateKey`] if the insert kept losing
    /// allocation races, and [`AppError::Internal`] on other storage errors.
    pub async fn submit(&self, original_url: &str) -> Result<MappingRecord, AppError> {
        if !self.validator.validate(original_url).await {
            return Err(AppError::invalid_url(original_url));
        }

        let strategy = ExponentialBackoff::from_millis(2)
            .max_delay(Duration::from_millis(50))
            .map(jitter)
            .take(self.allocation_retries);

        RetryIf::spawn(
            strategy,
            || self.find_or_create(original_url),
            |e: &AppError| {
                if e.is_duplicate_key() {
                    warn!("Allocation race for {}, retrying", original_url);
                    true
                } else {
                    false
                }
            },
        )
        .await
    }

    /// Resolves a short id to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, short_id: i64) -> Result<String, AppError> {
        self.store
            .find_by_short_id(short_id)
            .await?
            .map(|record| record.original_url)
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_url": short_id }))
            })
    }

    /// Returns the number of stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn mapping_count(&self) -> Result<i64, AppError> {
        self.store.count().await
    }

    async fn find_or_create(&self, original_url: &str) -> Result<MappingRecord, AppError> {
        if let Some(existing) = self.store.find_by_original_url(original_url).await? {
            debug!("Existing mapping {} -> {}", existing.short_id, original_url);
            return Ok(existing);
        }

        let short_id = self.allocator.next_id().await?;
        let record = self
            .store
            .insert(MappingRecord::new(original_url, short_id))
            .await?;

        info!("Created mapping {} -> {}", record.short_id, record.original_url);
        Ok(record)
    }
}
