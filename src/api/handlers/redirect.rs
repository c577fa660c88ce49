//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// Returns 302 Found with the original URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the id is not a number or no mapping has it.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let short_id = short_url.parse::<i64>().map_err(|_| {
        AppError::not_found("Short URL not found", json!({ "short_url": short_url }))
    })?;

    let original_url = state.mapping_service.resolve(short_id).await?;
    debug!("Redirecting {} -> {}", short_id, original_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]).into_response())
}
