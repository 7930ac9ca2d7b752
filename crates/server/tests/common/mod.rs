use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use server::db::AppState;
use shared_types::FeatureFlags;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tower::ServiceExt;

/// Build a pool over a private in-memory database with the schema applied.
///
/// A single connection that is never recycled keeps the in-memory
/// database alive for the whole test.
async fn test_pool() -> Pool<Sqlite> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid in-memory database URL");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    server::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

async fn build_app(flags: FeatureFlags, max_upload_bytes: usize) -> Router {
    let state = AppState::new(test_pool().await).expect("templates compile");
    server::openapi::app_router(state, &flags, max_upload_bytes)
}

#[allow(dead_code)]
/// Build the application router with the given feature flags.
pub async fn test_app_with_flags(flags: FeatureFlags) -> Router {
    build_app(flags, server::config::DEFAULT_MAX_UPLOAD_BYTES).await
}

#[allow(dead_code)]
/// Build the application router with a small request body cap.
pub async fn test_app_with_upload_limit(max_upload_bytes: usize) -> Router {
    build_app(FeatureFlags::default(), max_upload_bytes).await
}

#[allow(dead_code)]
/// Build the application router with every optional feature off.
pub async fn test_app() -> Router {
    test_app_with_flags(FeatureFlags::default()).await
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(req).await.unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
/// Helper to upload `content` as the `xml_file` field of a multipart form.
pub async fn post_xml_file(app: &Router, uri: &str, content: &str) -> (StatusCode, String) {
    const BOUNDARY: &str = "court-records-boundary";
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"xml_file\"; filename=\"cases.xml\"\r\n\
         Content-Type: application/xml\r\n\
         \r\n\
         {content}\r\n\
         --{BOUNDARY}--\r\n"
    );
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap();
    send(app, req).await
}

#[allow(dead_code)]
/// Helper to make a GET request and return the response content type.
pub async fn content_type(app: &Router, uri: &str) -> String {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
