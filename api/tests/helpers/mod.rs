#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

use api::routes::routes;
use api::state::AppState;
use common::config::Config;

pub fn init_test_config() {
    std::env::set_var("DATABASE_URL", "sqlite::memory:");
    std::env::set_var("JWT_SECRET", "test_secret_key_for_jwt_generation_and_validation");
    std::env::set_var("JWT_DURATION_MINUTES", "1440"); // 24 hours
    Config::init(".env.test");
}

/// Fresh router over its own in-memory database. The pool is returned so
/// tests can assert directly against the store.
pub async fn make_test_app() -> (Router, SqlitePool) {
    init_test_config();
    let pool = db::create_test_pool().await;
    let app = routes(AppState::new(pool.clone()));
    (app, pool)
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Registers a user and returns a login token for them.
pub async fn register_and_login(app: &Router, name: &str, email: &str, role: &str) -> String {
    let (status, _) = send_json(
        app,
        "POST",
        "/register",
        None,
        Some(json!({
            "name": name,
            "email": email,
            "password": "password1",
            "role": role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed for {email}");

    let (status, body) = send_json(
        app,
        "POST",
        "/login",
        None,
        Some(json!({ "email": email, "password": "password1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed for {email}");
    body["token"].as_str().unwrap().to_string()
}

/// Creates a class as the given token's user and returns its id.
pub async fn create_class(app: &Router, token: &str, class_name: &str, lecturer: &str) -> i64 {
    let (status, body) = send_json(
        app,
        "POST",
        "/classes",
        Some(token),
        Some(json!({
            "class_name": class_name,
            "course_name": "Web Application Development",
            "course_code": "DIWA2110",
            "lecturer": lecturer,
            "capacity": 40,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "class creation failed");
    body["id"].as_i64().unwrap()
}

/// Submits a report for `class_id` and returns its id.
pub async fn create_report(app: &Router, token: &str, class_id: i64) -> i64 {
    let (status, body) = send_json(
        app,
        "POST",
        "/reports",
        Some(token),
        Some(json!({
            "class_id": class_id,
            "week": 3,
            "date": "2025-08-18",
            "topic": "HTTP fundamentals",
            "actual_students": 32,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "report creation failed");
    body["report_id"].as_i64().unwrap()
}
