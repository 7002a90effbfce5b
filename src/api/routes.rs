//! API route configuration.

use crate::api::handlers::{hello_handler, not_found_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All routes nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`                  - Fixed greeting
/// - `POST /shorturl`               - Shorten a URL (JSON or form body)
/// - `GET  /shorturl/{short_url}`   - Redirect to the original URL
///
/// Any other method on these paths answers `404 Not Found`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
        .method_not_allowed_fallback(not_found_handler)
}
