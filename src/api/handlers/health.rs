//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreCheck,
}

/// Outcome of the store round-trip.
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mappings: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Mapping store reachable
/// - **503 Service Unavailable**: Mapping store failed a round-trip
///
/// # Response
///
/// ```json
/// { "status": "healthy", "version": "0.1.0", "store": { "ok": true, "mappings": 42 } }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store = match state.mapping_service.mapping_count().await {
        Ok(count) => StoreCheck {
            ok: true,
            mappings: Some(count),
            error: None,
        },
        Err(e) => StoreCheck {
            ok: false,
            mappings: None,
            error: Some(e.to_string()),
        },
    };

    let healthy = store.ok;
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store,
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
