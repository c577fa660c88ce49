//! Body extractors.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Matches `application/json` and `application/*+json`, ignoring case and
/// parameters.
fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Deserializes a body sent either as JSON or as a urlencoded form.
///
/// `application/json` bodies go through [`Json`]; everything else is read as
/// a form, which is what HTML forms post by default. Rejections become
/// [`AppError::Validation`].
#[derive(Debug)]
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
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
                AppError::bad_request("Invalid JSON payload", json!({ "reason": e.body_text() }))
            })?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
                AppError::bad_request("Invalid form payload", json!({ "reason": e.body_text() }))
            })?;
            Ok(Self(value))
        }
    }
}
