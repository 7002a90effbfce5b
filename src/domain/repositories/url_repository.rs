//! Repository trait for url record storage.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for [`UrlRecord`]s.
///
/// Records are only ever created; nothing in the service updates or deletes
/// them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds the record stored for an original URL.
    ///
    /// The comparison is exact: no normalization is applied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, AppError>;

    /// Finds the record stored under a short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Atomically reserves the next short id.
    ///
    /// Ids start at 1 and are never handed out twice, even under concurrent
    /// callers. A reserved id whose insert fails is not reused.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn next_short_url(&self) -> Result<i64, AppError>;

    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the original URL or the short id is
    /// already stored.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, AppError>;

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
