#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shorturl::application::services::{ShortenerService, UrlValidator};
use shorturl::domain::entities::UrlRecord;
use shorturl::domain::repositories::UrlRepository;
use shorturl::domain::resolver::HostResolver;
use shorturl::error::AppError;
use shorturl::infrastructure::dns::NoopResolver;
use shorturl::infrastructure::persistence::MemoryUrlRepository;
use shorturl::routes::router;
use shorturl::state::AppState;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Resolver that only knows a fixed set of hosts.
pub struct StaticResolver {
    hosts: HashSet<String>,
}

impl StaticResolver {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolves(&self, host: &str) -> bool {
        self.hosts.contains(host)
    }
}

/// Repository whose every call fails like a dropped database connection.
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn find_by_original_url(
        &self,
        _original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_by_short_url(&self, _short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn next_short_url(&self) -> Result<i64, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn insert(&self, _record: UrlRecord) -> Result<UrlRecord, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("connection refused"))
    }
}

pub fn create_test_state_with(
    repository: Arc<dyn UrlRepository>,
    resolver: Arc<dyn HostResolver>,
) -> AppState {
    let service = ShortenerService::new(repository, UrlValidator::new(resolver));
    AppState::new(Arc::new(service))
}

/// State backed by an in-memory store with DNS checks disabled.
///
/// The store handle is returned so tests can inspect what was written.
pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let state = create_test_state_with(repository.clone(), Arc::new(NoopResolver));
    (state, repository)
}

pub fn create_test_server(state: AppState) -> TestServer {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let app = router(state, root.join("public"), root.join("views"));
    TestServer::new(app).unwrap()
}
