//! Handler for unmatched routes.

use axum::http::StatusCode;

/// Answers any unknown route with a plain-text 404.
pub async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
