//! Application error type shared by the core and the HTTP layer.
//!
//! Every failure a request can hit is one of the [`AppError`] variants. The
//! HTTP layer renders them as:
//!
//! ```json
//! { "error": { "code": "invalid_url", "message": "Invalid URL", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request payload itself is malformed (rejected at the boundary).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The URL has no parseable host or its host does not resolve.
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },

    /// No mapping exists for the requested short id.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The store rejected an insert because a unique key already exists.
    #[error("{message}")]
    DuplicateKey { message: String, details: Value },

    /// Any other storage or runtime failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_url(url: &str) -> Self {
        Self::InvalidUrl {
            message: "Invalid URL".to_string(),
            details: json!({ "url": url }),
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn duplicate_key(constraint: Option<&str>) -> Self {
        Self::DuplicateKey {
            message: "Unique constraint violation".to_string(),
            details: json!({ "constraint": constraint }),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns true for failures raised by the mapping store.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. } | Self::Internal { .. })
    }

    /// Returns true when an insert lost a uniqueness race.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateKey { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::InvalidUrl { .. } => "invalid_url",
            Self::NotFound { .. } => "not_found",
            Self::DuplicateKey { .. } => "conflict",
            Self::Internal { .. } => "internal_error",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::InvalidUrl { message, details }
            | Self::NotFound { message, details }
            | Self::DuplicateKey { message, details }
            | Self::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Internal { message, .. } = &self {
            tracing::error!("Internal error: {}", message);
        }

        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::duplicate_key(db.constraint());
        }

        tracing::error!("Database error: {}", e);
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&errors).unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::invalid_url("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("missing", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::duplicate_key(Some("url_mappings_short_id_key")).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_error_classification() {
        assert!(AppError::duplicate_key(None).is_storage_error());
        assert!(AppError::internal("boom", json!({})).is_storage_error());
        assert!(!AppError::invalid_url("x").is_storage_error());
        assert!(!AppError::not_found("missing", json!({})).is_storage_error());

        assert!(AppError::duplicate_key(None).is_duplicate_key());
        assert!(!AppError::internal("boom", json!({})).is_duplicate_key());
    }

    #[test]
    fn test_error_info_carries_details() {
        let info = AppError::duplicate_key(Some("url_mappings_short_id_key")).to_error_info();

        assert_eq!(info.code, "conflict");
        assert_eq!(info.details["constraint"], "url_mappings_short_id_key");
    }

    #[test]
    fn test_invalid_url_message() {
        let err = AppError::invalid_url("http://nowhere.invalid");

        assert_eq!(err.to_string(), "Invalid URL");
        assert_eq!(err.to_error_info().details["url"], "http://nowhere.invalid");
    }
}
