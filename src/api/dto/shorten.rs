//! DTOs for URL submission.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::MappingRecord;

/// Request to shorten a URL.
///
/// Accepted as `application/x-www-form-urlencoded` (`url=...`) or JSON.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    /// The URL to shorten, stored exactly as given.
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,
}

/// A URL and its assigned short id.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitResponse {
    pub original_url: String,
    pub short_url: i64,
}

/// Body of `POST /api/shorturl`.
///
/// A URL whose host does not resolve is answered with `200 OK` and a flat
/// `{"error": "Invalid URL"}` body rather than an error status.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ShortenResponse {
    Created(SubmitResponse),
    Rejected { error: &'static str },
}

impl ShortenResponse {
    pub const INVALID_URL: &'static str = "Invalid URL";

    pub fn invalid_url() -> Self {
        Self::Rejected {
            error: Self::INVALID_URL,
        }
    }
}

impl From<MappingRecord> for SubmitResponse {
    fn from(record: MappingRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.short_id,
        }
    }
}
