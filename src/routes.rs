//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Landing page (`views/index.html`)
//! - `GET  /public/*`  - Static assets
//! - `GET  /health`    - Health check
//! - `/api/*`          - Short URL API
//! - anything else     - `404 Not Found` (plain text), including a known
//!   path requested with the wrong method
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Builds the router with all routes and middleware, without path
/// normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/public`
/// - `views_dir` - directory holding `index.html` for `/`
pub fn router(
    state: AppState,
    static_dir: impl AsRef<Path>,
    views_dir: impl AsRef<Path>,
) -> Router {
    let index = views_dir.as_ref().join("index.html");

    Router::new()
        .route_service("/", ServeFile::new(index))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/public", ServeDir::new(static_dir.as_ref()))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
///
/// Same as [`router`], with trailing slashes trimmed before routing.
pub fn app_router(
    state: AppState,
    static_dir: impl AsRef<Path>,
    views_dir: impl AsRef<Path>,
) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir, views_dir))
}
