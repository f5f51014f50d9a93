//! Handler tests for the images domain

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_images::{ImageResolver, ImageService, handlers};
use http_body_util::BodyExt;
use test_utils::TestCatalogDir;
use tower::ServiceExt;

fn app(dir: &TestCatalogDir) -> Router {
    handlers::router(ImageService::new(ImageResolver::new(dir.image_dir())))
}

#[tokio::test]
async fn serves_existing_image_as_jpeg() {
    let dir = TestCatalogDir::new();
    dir.add_image("mug.jpg", b"mug-bytes");

    let response = app(&dir)
        .oneshot(Request::builder().uri("/mug.jpg").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "image/jpeg"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"mug-bytes");
}

#[tokio::test]
async fn missing_image_serves_placeholder() {
    let dir = TestCatalogDir::new();
    dir.add_image("default.jpg", b"placeholder");

    let response = app(&dir)
        .oneshot(
            Request::builder()
                .uri("/does-not-exist.jpg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"placeholder");
}

#[tokio::test]
async fn non_jpg_request_is_bad_request() {
    let dir = TestCatalogDir::new();

    let response = app(&dir)
        .oneshot(Request::builder().uri("/x.png").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Image path does not end with .jpg");
}

#[tokio::test]
async fn missing_placeholder_is_a_server_error() {
    let dir = TestCatalogDir::new();

    let response = app(&dir)
        .oneshot(
            Request::builder()
                .uri("/does-not-exist.jpg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
