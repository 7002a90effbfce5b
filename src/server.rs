//! HTTP server initialization and runtime setup.
//!
//! Builds the record store and resolver, wires the shortener service into
//! the router and runs the Axum server until a shutdown signal arrives.

use crate::application::services::{ShortenerService, UrlValidator};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::UrlRepository;
use crate::domain::resolver::HostResolver;
use crate::infrastructure::dns::{DnsResolver, NoopResolver};
use crate::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Record store (PostgreSQL pool with migrations, or in-memory)
/// - Hostname resolver (DNS or no-op)
/// - Axum HTTP server with graceful shutdown
///
/// An unreachable database does not stop startup: the failure is logged and
/// requests fail at the store until it becomes reachable.
///
/// # Errors
///
/// Returns an error if:
/// - `DATABASE_URL` cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let resolver = build_resolver(&config);

    let shortener_service = Arc::new(ShortenerService::new(
        repository,
        UrlValidator::new(resolver),
    ));
    let state = AppState::new(shortener_service);

    let app = app_router(state, &config.static_dir, &config.views_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Creates the configured record store.
async fn build_repository(config: &Config) -> Result<Arc<dyn UrlRepository>> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Storage: in-memory (records are lost on restart)");
            Ok(Arc::new(MemoryUrlRepository::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set when STORAGE=postgres")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect_lazy(database_url)
                .context("Invalid DATABASE_URL")?;

            match sqlx::migrate!("./migrations").run(&pool).await {
                Ok(()) => tracing::info!("Connected to database"),
                Err(e) => tracing::error!(
                    error = %e,
                    "Database unavailable at startup; requests will fail until it is reachable"
                ),
            }

            Ok(Arc::new(PgUrlRepository::new(Arc::new(pool))))
        }
    }
}

/// Creates the hostname resolver used by URL validation.
fn build_resolver(config: &Config) -> Arc<dyn HostResolver> {
    if config.dns_check {
        Arc::new(DnsResolver::new(config.dns_timeout()))
    } else {
        Arc::new(NoopResolver::new())
    }
}

/// Resolves on the first shutdown signal the process receives.
///
/// Listens for SIGTERM and Ctrl-C on Unix, Ctrl-C elsewhere.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }

    tracing::info!("Shutdown signal received");
}
