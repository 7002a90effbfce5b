//! In-memory implementation of the url repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Url records held in process memory.
///
/// Records live as long as the process. Two sharded maps index the same
/// records by original URL and by short id; the original-URL map is the
/// source of truth for uniqueness.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    by_original: DashMap<String, i64>,
    by_short: DashMap<i64, String>,
    sequence: AtomicI64,
}

impl MemoryUrlRepository {
    /// Creates an empty repository whose first id will be 1.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .by_original
            .get(original_url)
            .map(|short_url| UrlRecord::new(original_url, *short_url)))
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .by_short
            .get(&short_url)
            .map(|original_url| UrlRecord::new(original_url.as_str(), short_url)))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.by_original.len() as i64)
    }

    async fn next_short_url(&self) -> Result<i64, AppError> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, AppError> {
        // Lock order: by_original, then by_short.
        let Entry::Vacant(original_slot) = self.by_original.entry(record.original_url.clone())
        else {
            return Err(AppError::Conflict {
                constraint: Some("url_records_original_url_key".to_string()),
            });
        };

        let Entry::Vacant(short_slot) = self.by_short.entry(record.short_url) else {
            return Err(AppError::Conflict {
                constraint: Some("url_records_pkey".to_string()),
            });
        };

        short_slot.insert(record.original_url.clone());
        original_slot.insert(record.short_url);

        Ok(record)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
