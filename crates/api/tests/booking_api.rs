//! HTTP-level integration tests for booking submission and listing.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, post_json, FailingNotifier, MockStorage, RecordingNotifier};
use sqlx::SqlitePool;

fn booking_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Alex Chen",
        "email": "alex@example.com",
        "phone": "+351 911 222 333",
        "location": "Faro",
        "message": "Looking for a kitchen remodel quote.",
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_persists_and_notifies(pool: SqlitePool) {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = common::build_test_app_with(
        pool.clone(),
        Arc::new(MockStorage::default()),
        notifier.clone(),
    );

    let response = post_json(app, "/api/bookings", booking_payload()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    // One notification went out, carrying the booking fields.
    let sent = notifier.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Alex Chen");
    assert_eq!(sent[0].email, "alex@example.com");
    drop(sent);

    // And the booking is durable.
    let response = get(common::build_test_app(pool), "/api/bookings").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_without_message_is_accepted(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/bookings",
        serde_json::json!({
            "name": "Alex Chen",
            "email": "alex@example.com",
            "phone": "+351 911 222 333",
            "location": "Faro",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_missing_required_field_returns_400(pool: SqlitePool) {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = common::build_test_app_with(
        pool.clone(),
        Arc::new(MockStorage::default()),
        notifier.clone(),
    );

    let response = post_json(
        app,
        "/api/bookings",
        serde_json::json!({
            "name": "Alex Chen",
            "email": "alex@example.com",
            "location": "Faro",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "phone is required");

    // Nothing was saved and nothing was sent.
    assert!(notifier.sent.lock().await.is_empty());
    let response = get(common::build_test_app(pool), "/api/bookings").await;
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Notification failure semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn notification_failure_keeps_the_booking(pool: SqlitePool) {
    let app = common::build_test_app_with(
        pool.clone(),
        Arc::new(MockStorage::default()),
        Arc::new(FailingNotifier),
    );

    let response = post_json(app, "/api/bookings", booking_payload()).await;

    // The failure is reported distinctly...
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOTIFICATION_FAILED");

    // ...but the booking row survived.
    let response = get(common::build_test_app(pool), "/api/bookings").await;
    let json = body_json(response).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Alex Chen");
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_bookings_returns_newest_first(pool: SqlitePool) {
    for name in ["First", "Second"] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/bookings",
            serde_json::json!({
                "name": name,
                "email": "x@example.com",
                "phone": "123",
                "location": "Faro",
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(common::build_test_app(pool), "/api/bookings").await;
    let json = body_json(response).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "Second");
    assert_eq!(list[1]["name"], "First");
}
