mod helpers;

use axum::http::StatusCode;
use serial_test::serial;
use serde_json::json;

use helpers::{make_test_app, send_json};

#[tokio::test]
#[serial]
async fn crud_works_without_any_token() {
    let (app, _pool) = make_test_app().await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/courses",
        None,
        Some(json!({
            "course_code": "DIWA2110",
            "course_name": "Web Application Development",
            "faculty": "Faculty of Information Communication Technology",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["course_id"].as_i64().unwrap();

    let (status, body) = send_json(&app, "GET", "/courses", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/courses/{id}"),
        None,
        Some(json!({ "course_name": "Web Application Development II" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["course_name"], "Web Application Development II");
    assert_eq!(body["course_code"], "DIWA2110");

    let (status, _) = send_json(&app, "GET", &format!("/courses/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(&app, "DELETE", &format!("/courses/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(&app, "GET", &format!("/courses/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn create_without_required_columns_is_a_store_error() {
    let (app, _pool) = make_test_app().await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/courses",
        None,
        Some(json!({ "faculty": "FICT" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Database error"));
}

#[tokio::test]
#[serial]
async fn unknown_course_is_not_found() {
    let (app, _pool) = make_test_app().await;

    let (status, _) = send_json(&app, "GET", "/courses/42", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(&app, "DELETE", "/courses/42", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
