//! Handler for the short URL creation endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonOrForm;
use crate::application::services::ShortenStatus;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// JSON `{"url": "https://www.freecodecamp.org"}` or the form
/// `url=https%3A%2F%2Fwww.freecodecamp.org`.
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// - **201 Created**: the URL was stored for the first time
/// - **200 OK**: the URL was already stored; the existing id is returned
///
/// # Errors
///
/// - **200** `{"error": "Invalid URL"}` if the URL is missing, malformed or
///   its host does not resolve
/// - **500** `{"error": "Failed to process request"}` on storage errors
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let shortened = state
        .shortener_service
        .create_short_url(payload.url.as_deref())
        .await?;

    let status = match shortened.status {
        ShortenStatus::Created => StatusCode::CREATED,
        ShortenStatus::Existing => StatusCode::OK,
    };

    Ok((status, Json(shortened.record.into())))
}
