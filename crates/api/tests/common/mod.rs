//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as
//! `main.rs`) on top of an isolated test database, with in-memory
//! doubles standing in for the object store and the SMTP notifier.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use bytes::Bytes;
use tokio::sync::Mutex;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_cloud::{CloudError, ObjectStorage};
use folio_db::DbPool;
use folio_notify::{BookingMessage, Notifier, NotifyError};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_timeout: Duration::from_millis(500),
    }
}

// ---------------------------------------------------------------------------
// Object storage double
// ---------------------------------------------------------------------------

/// In-memory [`ObjectStorage`] double.
///
/// Records every accepted upload and can be told to fail or stall
/// uploads whose key contains a given substring, which lets tests
/// produce partial batch outcomes deterministically.
#[derive(Default)]
pub struct MockStorage {
    /// `(key, content_type)` for every successful put, in completion order.
    pub uploads: Mutex<Vec<(String, String)>>,
    /// Keys containing this substring are rejected.
    pub fail_matching: Option<String>,
    /// Keys containing this substring sleep longer than the test
    /// harness upload timeout.
    pub stall_matching: Option<String>,
}

impl MockStorage {
    pub fn failing_on(substring: &str) -> Self {
        Self {
            fail_matching: Some(substring.to_string()),
            ..Self::default()
        }
    }

    pub fn stalling_on(substring: &str) -> Self {
        Self {
            stall_matching: Some(substring.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ObjectStorage for MockStorage {
    async fn put(&self, key: &str, content_type: &str, _data: Bytes) -> Result<String, CloudError> {
        // Match on the file-name tail only; the random key prefix must
        // never trip a pattern.
        let file_name = key.rsplit('-').next().unwrap_or(key);
        if let Some(pattern) = &self.stall_matching {
            if file_name.contains(pattern.as_str()) {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
        }
        if let Some(pattern) = &self.fail_matching {
            if file_name.contains(pattern.as_str()) {
                return Err(CloudError::Upload("simulated store rejection".to_string()));
            }
        }
        self.uploads
            .lock()
            .await
            .push((key.to_string(), content_type.to_string()));
        Ok(format!("http://cdn.test/{key}"))
    }
}

// ---------------------------------------------------------------------------
// Notifier doubles
// ---------------------------------------------------------------------------

/// Records every booking notification instead of sending email.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<BookingMessage>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn booking_created(&self, booking: &BookingMessage) -> Result<(), NotifyError> {
        self.sent.lock().await.push(booking.clone());
        Ok(())
    }
}

/// Always fails delivery, simulating an unreachable SMTP server.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn booking_created(&self, _booking: &BookingMessage) -> Result<(), NotifyError> {
        Err(NotifyError::Build("simulated delivery failure".to_string()))
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the application router with default doubles.
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with(
        pool,
        Arc::new(MockStorage::default()),
        Arc::new(RecordingNotifier::default()),
    )
}

/// Build the application router with explicit storage/notifier doubles.
///
/// Mirrors the router construction in `main.rs` so tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app_with(
    pool: DbPool,
    storage: Arc<dyn ObjectStorage>,
    notifier: Arc<dyn Notifier>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
        notifier,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the given path.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request to the given path.
pub async fn delete(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as a UTF-8 string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "folio-test-boundary";

/// Assemble a `multipart/form-data` body from `(file_name, contents)`
/// pairs, each sent as an `images` file field.
pub fn multipart_body(files: &[(&str, &[u8])]) -> (String, Vec<u8>) {
    let mut body: Vec<u8> = Vec::new();
    for (file_name, contents) in files {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"images\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
        body.extend_from_slice(contents);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// Send a multipart POST built from `(file_name, contents)` pairs.
pub async fn post_multipart(app: Router, path: &str, files: &[(&str, &[u8])]) -> Response<Body> {
    let (content_type, body) = multipart_body(files);
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Shorthand: create a project over the API and return its id.
pub async fn create_project(app: Router, title: &str) -> i64 {
    let response = post_json(
        app,
        "/api/projects",
        serde_json::json!({
            "title": title,
            "description": "A test project",
            "owner_name": "Dana Smith",
            "location": "Lisbon",
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
