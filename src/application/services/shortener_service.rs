//! Short URL creation and resolution service.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::services::url_validator::UrlValidator;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Whether a shortening request produced a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortenStatus {
    /// The URL was stored for the first time.
    Created,
    /// The URL had already been shortened; the stored record was returned.
    Existing,
}

/// Outcome of [`ShortenerService::create_short_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub record: UrlRecord,
    pub status: ShortenStatus,
}

/// Service for creating and resolving short URLs.
///
/// Validates submissions, deduplicates against stored records and assigns
/// sequential ids from the repository's atomic counter.
pub struct ShortenerService {
    repository: Arc<dyn UrlRepository>,
    validator: UrlValidator,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<dyn UrlRepository>, validator: UrlValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Shortens a submitted URL.
    ///
    /// # Deduplication
    ///
    /// If the exact URL string is already stored, returns the stored record
    /// with [`ShortenStatus::Existing`]. A concurrent submission of the same
    /// URL that wins the insert is treated the same way.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if validation fails; nothing is stored.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_short_url(&self, input: Option<&str>) -> Result<Shortened, AppError> {
        if let Err(e) = self.validator.validate(input).await {
            warn!(url = input.unwrap_or_default(), error = %e, "Rejected URL");
            return Err(e);
        }
        let original_url = input.unwrap_or_default();

        if let Some(record) = self.repository.find_by_original_url(original_url).await? {
            debug!(short_url = record.short_url, "URL already shortened");
            return Ok(Shortened {
                record,
                status: ShortenStatus::Existing,
            });
        }

        let short_url = self.repository.next_short_url().await?;

        match self
            .repository
            .insert(UrlRecord::new(original_url, short_url))
            .await
        {
            Ok(record) => {
                info!(short_url = record.short_url, "Short URL created");
                Ok(Shortened {
                    record,
                    status: ShortenStatus::Created,
                })
            }
            Err(AppError::Conflict { constraint }) => {
                debug!(?constraint, "Lost insert race, returning stored record");
                let record = self
                    .repository
                    .find_by_original_url(original_url)
                    .await?
                    .ok_or_else(|| {
                        AppError::internal("Conflicting record vanished after insert")
                    })?;
                Ok(Shortened {
                    record,
                    status: ShortenStatus::Existing,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Returns the original URL stored under a short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve_short_url(&self, short_url: i64) -> Result<String, AppError> {
        self.repository
            .find_by_short_url(short_url)
            .await?
            .map(|record| record.original_url)
            .ok_or(AppError::NotFound)
    }

    /// Checks the store and returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn health(&self) -> Result<i64, AppError> {
        self.repository.ping().await?;
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use crate::domain::resolver::MockHostResolver;

    fn accepting_validator() -> UrlValidator {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolves().returning(|_| true);
        UrlValidator::new(Arc::new(resolver))
    }

    fn service(repo: MockUrlRepository) -> ShortenerService {
        ShortenerService::new(Arc::new(repo), accepting_validator())
    }

    #[tokio::test]
    async fn test_create_short_url_success() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_next_short_url()
            .times(1)
            .returning(|| Ok(1));
        mock_repo
            .expect_insert()
            .withf(|r| r.original_url == "https://www.freecodecamp.org" && r.short_url == 1)
            .times(1)
            .returning(Ok);

        let result = service(mock_repo)
            .create_short_url(Some("https://www.freecodecamp.org"))
            .await
            .unwrap();

        assert_eq!(result.status, ShortenStatus::Created);
        assert_eq!(
            result.record,
            UrlRecord::new("https://www.freecodecamp.org", 1)
        );
    }

    #[tokio::test]
    async fn test_create_short_url_deduplication() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_original_url()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|url| Ok(Some(UrlRecord::new(url, 5))));
        mock_repo.expect_next_short_url().times(0);
        mock_repo.expect_insert().times(0);

        let result = service(mock_repo)
            .create_short_url(Some("https://example.com"))
            .await
            .unwrap();

        assert_eq!(result.status, ShortenStatus::Existing);
        assert_eq!(result.record.short_url, 5);
    }

    #[tokio::test]
    async fn test_create_short_url_invalid_url_touches_no_store() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_find_by_original_url().times(0);
        mock_repo.expect_insert().times(0);

        let result = service(mock_repo).create_short_url(Some("not-a-url")).await;

        assert!(matches!(result, Err(AppError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_create_short_url_missing_input() {
        let mock_repo = MockUrlRepository::new();

        let result = service(mock_repo).create_short_url(None).await;

        assert!(matches!(result, Err(AppError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_create_short_url_unresolvable_host() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolves().returning(|_| false);
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_insert().times(0);

        let service = ShortenerService::new(
            Arc::new(mock_repo),
            UrlValidator::new(Arc::new(resolver)),
        );

        let result = service
            .create_short_url(Some("https://nothing-here.example.com"))
            .await;

        assert!(matches!(result, Err(AppError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_create_short_url_lost_race_returns_winner() {
        let mut mock_repo = MockUrlRepository::new();

        let mut lookups = 0;
        mock_repo
            .expect_find_by_original_url()
            .times(2)
            .returning(move |url| {
                lookups += 1;
                if lookups == 1 {
                    Ok(None)
                } else {
                    Ok(Some(UrlRecord::new(url, 7)))
                }
            });
        mock_repo
            .expect_next_short_url()
            .times(1)
            .returning(|| Ok(8));
        mock_repo.expect_insert().times(1).returning(|_| {
            Err(AppError::Conflict {
                constraint: Some("url_records_original_url_key".to_string()),
            })
        });

        let result = service(mock_repo)
            .create_short_url(Some("https://example.com"))
            .await
            .unwrap();

        assert_eq!(result.status, ShortenStatus::Existing);
        assert_eq!(result.record.short_url, 7);
    }

    #[tokio::test]
    async fn test_create_short_url_store_failure() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_find_by_original_url()
            .returning(|_| Err(AppError::internal("connection refused")));

        let result = service(mock_repo)
            .create_short_url(Some("https://example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_resolve_short_url_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_find_by_short_url()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| Ok(Some(UrlRecord::new("https://www.freecodecamp.org", id))));

        let url = service(mock_repo).resolve_short_url(1).await.unwrap();

        assert_eq!(url, "https://www.freecodecamp.org");
    }

    #[tokio::test]
    async fn test_resolve_short_url_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_find_by_short_url()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo).resolve_short_url(99999).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_resolve_short_url_store_failure() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_find_by_short_url()
            .returning(|_| Err(AppError::internal("timeout")));

        let result = service(mock_repo).resolve_short_url(1).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_health_reports_count() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_ping().times(1).returning(|| Ok(()));
        mock_repo.expect_count().times(1).returning(|| Ok(2));

        assert_eq!(service(mock_repo).health().await.unwrap(), 2);
    }
}
