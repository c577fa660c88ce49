//! Handler for URL submission endpoint.

use axum::{Json, extract::State};
use tracing::debug;
use validator::Validate;

use crate::api::dto::shorten::{ShortenResponse, SubmitRequest};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Assigns a short id to a URL, or returns the one it already has.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// Form-encoded `url=https://example.com` or JSON:
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
///
/// A URL whose host does not resolve is still a 200:
///
/// ```json
/// { "error": "Invalid URL" }
/// ```
///
/// # Errors
///
/// - 400 `validation_error` if the payload is malformed
/// - 409 `conflict` if the id allocation race could not be resolved
/// - 500 `internal_error` on storage failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<SubmitRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    match state.mapping_service.submit(&payload.url).await {
        Ok(record) => Ok(Json(ShortenResponse::Created(record.into()))),
        Err(AppError::InvalidUrl { .. }) => {
            debug!("Answering invalid URL {}", payload.url);
            Ok(Json(ShortenResponse::invalid_url()))
        }
        Err(e) => Err(e),
    }
}
