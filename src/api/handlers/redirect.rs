//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// The path segment is parsed as an integer id; a segment that is not an
/// integer cannot name a record and is answered like an unknown id.
///
/// # Response
///
/// **302 Found** with `Location` set to the original URL.
///
/// # Errors
///
/// - **404** `{"error": "Short URL not found"}` if no record has this id
/// - **500** `{"error": "Failed to process request"}` on storage errors
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Ok(id) = short_url.parse::<i64>() else {
        debug!(short_url, "Short URL is not an integer");
        return Err(AppError::NotFound);
    };

    let original_url = state.shortener_service.resolve_short_url(id).await?;
    let location = location_header(&original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value, percent-encoding the URL if it holds bytes a
/// header cannot carry verbatim.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    let encoded = Url::parse(original_url)
        .map_err(|e| AppError::internal(format!("Stored URL no longer parses: {e}")))?;

    HeaderValue::from_str(encoded.as_str())
        .map_err(|e| AppError::internal(format!("Stored URL is not a valid header: {e}")))
}
