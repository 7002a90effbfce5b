//! PostgreSQL repository tests.
//!
//! These need a live database: run with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.

use shorturl::domain::entities::UrlRecord;
use shorturl::domain::repositories::UrlRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let id = repo.next_short_url().await.unwrap();
    let stored = repo
        .insert(UrlRecord::new("https://example.com", id))
        .await
        .unwrap();

    assert_eq!(stored, UrlRecord::new("https://example.com", id));

    let by_short = repo.find_by_short_url(id).await.unwrap();
    assert_eq!(by_short, Some(stored.clone()));

    let by_original = repo
        .find_by_original_url("https://example.com")
        .await
        .unwrap();
    assert_eq!(by_original, Some(stored));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_sequence_starts_at_one(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert_eq!(repo.next_short_url().await.unwrap(), 1);
    assert_eq!(repo.next_short_url().await.unwrap(), 2);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_find_missing(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.find_by_short_url(99999).await.unwrap().is_none());
    assert!(
        repo.find_by_original_url("https://nowhere.example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_duplicate_original_url_conflicts(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.insert(UrlRecord::new("https://example.com", 1))
        .await
        .unwrap();

    let result = repo.insert(UrlRecord::new("https://example.com", 2)).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_count_and_ping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.ping().await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 0);

    repo.insert(UrlRecord::new("https://a.example.com", 1))
        .await
        .unwrap();
    repo.insert(UrlRecord::new("https://b.example.com", 2))
        .await
        .unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
}
