mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use shorturl::domain::repositories::MappingStore;
use shorturl::routes::{StaticAssets, app_router};
use std::path::PathBuf;
use tower::ServiceExt;

fn assets() -> StaticAssets {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    StaticAssets {
        public_dir: root.join("public"),
        views_dir: root.join("views"),
    }
}

#[tokio::test]
async fn test_landing_page() {
    let (state, _store) = common::create_test_state();
    let app = app_router(state, &assets());

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("action=\"/api/shorturl\""));
}

#[tokio::test]
async fn test_public_asset() {
    let (state, _store) = common::create_test_state();
    let app = app_router(state, &assets());

    let response = app
        .oneshot(Request::get("/public/style.css").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (state, _store) = common::create_test_state();
    let app = app_router(state, &assets());

    let response = app
        .oneshot(Request::get("/api/hello/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_form_submission_through_full_stack() {
    let (state, store) = common::create_test_state();
    let app = app_router(state, &assets());

    let response = app
        .oneshot(
            Request::post("/api/shorturl")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("url=https%3A%2F%2Fexample.com%2Fa"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["original_url"], "https://example.com/a");
    assert_eq!(json["short_url"], 1);

    assert_eq!(store.count().await.unwrap(), 1);
}
