//! Request body extractor accepting JSON or urlencoded forms.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Decodes the body as JSON when the request says so (`application/json` or
/// any `+json` subtype, case-insensitively), and as an
/// `application/x-www-form-urlencoded` form otherwise.
///
/// A body that cannot be decoded is rejected with [`AppError::InvalidUrl`],
/// the same answer a missing URL gets.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::invalid_url(format!("Malformed JSON body: {e}")))?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::invalid_url(format!("Malformed form body: {e}")))?;
            Ok(Self(value))
        }
    }
}

/// Whether a `Content-Type` value names a JSON media type.
fn is_json_content_type(value: &str) -> bool {
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let Some((kind, subtype)) = essence.split_once('/') else {
        return false;
    };

    kind == "application" && (subtype == "json" || subtype.ends_with("+json"))
}
