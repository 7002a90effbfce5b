//! Application error type and its HTTP representation.
//!
//! Every failure in the request path is expressed as an [`AppError`] and
//! converted into a JSON body of the shape `{"error": "<message>"}` at the
//! handler boundary. Internal details are logged, never returned.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Client-facing message for rejected submissions.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL";
/// Client-facing message for unknown short ids.
pub const NOT_FOUND_MESSAGE: &str = "Short URL not found";
/// Client-facing message for any store failure.
pub const PROCESSING_FAILURE_MESSAGE: &str = "Failed to process request";

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad syntax, missing protocol, or a host that does not resolve.
    #[error("invalid URL: {reason}")]
    InvalidUrl { reason: String },

    /// The short id has no stored mapping.
    #[error("short URL not found")]
    NotFound,

    /// A uniqueness constraint rejected a write.
    #[error("unique constraint violation: {constraint:?}")]
    Conflict { constraint: Option<String> },

    /// Any storage-layer failure.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status sent to the client.
    ///
    /// Rejected URLs answer with `200 OK` and an error body, which existing
    /// clients of this API rely on.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. } => StatusCode::OK,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::InvalidUrl { .. } => INVALID_URL_MESSAGE,
            AppError::NotFound => NOT_FOUND_MESSAGE,
            AppError::Conflict { .. } | AppError::Internal { .. } => PROCESSING_FAILURE_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message } = &self {
            tracing::error!(error = %message, "Request failed");
        }

        let body = ErrorBody {
            error: self.client_message(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::Conflict {
            constraint: db.constraint().map(str::to_owned),
        };
    }

    AppError::internal(format!("Database error: {e}"))
}
