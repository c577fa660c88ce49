//! PostgreSQL store tests. Run with a database:
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo test --test repository_mapping -- --ignored
//! ```

use sqlx::PgPool;
use std::sync::Arc;
use shorturl::domain::entities::MappingRecord;
use shorturl::domain::repositories::{MappingStore, ORIGINAL_URL_CONSTRAINT, SHORT_ID_CONSTRAINT};
use shorturl::infrastructure::persistence::PgMappingStore;

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_insert_and_find(pool: PgPool) {
    let store = PgMappingStore::new(Arc::new(pool));

    let inserted = store
        .insert(MappingRecord::new("https://example.com", 1))
        .await
        .unwrap();
    assert_eq!(inserted, MappingRecord::new("https://example.com", 1));

    let by_url = store.find_by_original_url("https://example.com").await.unwrap();
    assert_eq!(by_url, Some(inserted.clone()));

    let by_id = store.find_by_short_id(1).await.unwrap();
    assert_eq!(by_id, Some(inserted));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_find_missing(pool: PgPool) {
    let store = PgMappingStore::new(Arc::new(pool));

    assert!(store.find_by_short_id(999_999).await.unwrap().is_none());
    assert!(
        store
            .find_by_original_url("https://example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_count(pool: PgPool) {
    let store = PgMappingStore::new(Arc::new(pool));
    assert_eq!(store.count().await.unwrap(), 0);

    store
        .insert(MappingRecord::new("https://example.com", 1))
        .await
        .unwrap();
    store
        .insert(MappingRecord::new("https://rust-lang.org", 2))
        .await
        .unwrap();

    assert_eq!(store.count().await.unwrap(), 2);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_duplicate_url_rejected(pool: PgPool) {
    let store = PgMappingStore::new(Arc::new(pool));
    store
        .insert(MappingRecord::new("https://example.com", 1))
        .await
        .unwrap();

    let err = store
        .insert(MappingRecord::new("https://example.com", 2))
        .await
        .unwrap_err();

    assert!(err.is_duplicate_key());
    assert_eq!(err.to_error_info().details["constraint"], ORIGINAL_URL_CONSTRAINT);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_duplicate_short_id_rejected(pool: PgPool) {
    let store = PgMappingStore::new(Arc::new(pool));
    store
        .insert(MappingRecord::new("https://example.com", 1))
        .await
        .unwrap();

    let err = store
        .insert(MappingRecord::new("https://rust-lang.org", 1))
        .await
        .unwrap_err();

    assert!(err.is_duplicate_key());
    assert_eq!(err.to_error_info().details["constraint"], SHORT_ID_CONSTRAINT);
    assert!(
        store
            .find_by_original_url("https://rust-lang.org")
            .await
            .unwrap()
            .is_none()
    );
}
