use axum::Json;

use crate::api::dto::hello::HelloResponse;

/// `GET /api/hello`
pub async fn hello_handler() -> Json<HelloResponse> {
    Json(HelloResponse {
        greeting: "hello API",
    })
}
