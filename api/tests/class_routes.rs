mod helpers;

use axum::http::StatusCode;
use serial_test::serial;
use serde_json::json;

use helpers::{create_class, make_test_app, register_and_login, send_json};

#[tokio::test]
#[serial]
async fn listing_requires_authentication() {
    let (app, _pool) = make_test_app().await;
    let (status, _) = send_json(&app, "GET", "/classes", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn students_cannot_create_classes() {
    let (app, _pool) = make_test_app().await;
    let token = register_and_login(&app, "S", "s@x.com", "student").await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/classes",
        Some(&token),
        Some(json!({
            "class_name": "CS101-A",
            "course_name": "Web Application Development",
            "course_code": "DIWA2110",
            "lecturer": "S",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn creation_requires_all_core_fields() {
    let (app, _pool) = make_test_app().await;
    let token = register_and_login(&app, "A", "a@x.com", "lecturer").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/classes",
        Some(&token),
        Some(json!({ "class_name": "CS101-A", "lecturer": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("course_name"));
    assert!(message.contains("course_code"));
    assert!(message.contains("lecturer"));
}

#[tokio::test]
#[serial]
async fn capacity_accepts_numeric_strings() {
    let (app, _pool) = make_test_app().await;
    let token = register_and_login(&app, "A", "a@x.com", "lecturer").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/classes",
        Some(&token),
        Some(json!({
            "class_name": "CS101-A",
            "course_name": "Web Application Development",
            "course_code": "DIWA2110",
            "lecturer": "A",
            "capacity": "45",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["capacity"], 45);
    assert_eq!(body["status"], "active");
}

#[tokio::test]
#[serial]
async fn ownership_gates_update_and_delete() {
    let (app, _pool) = make_test_app().await;
    let creator = register_and_login(&app, "A", "a@x.com", "lecturer").await;
    let other = register_and_login(&app, "B", "b@x.com", "lecturer").await;
    let leader = register_and_login(&app, "P", "p@x.com", "pl").await;

    let id = create_class(&app, &creator, "CS101-A", "A").await;

    // Another lecturer may not touch it, and the row stays unchanged.
    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/classes/{id}"),
        Some(&other),
        Some(json!({ "venue": "Hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, body) = send_json(&app, "GET", "/classes", Some(&creator), None).await;
    assert!(body[0]["venue"].is_null());
    assert_eq!(body[0]["created_by"], "A");

    let (status, _) = send_json(&app, "DELETE", &format!("/classes/{id}"), Some(&other), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The creator updates; a program leader eventually deletes.
    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/classes/{id}"),
        Some(&creator),
        Some(json!({ "venue": "Room 12", "capacity": "50" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["venue"], "Room 12");
    assert_eq!(body["capacity"], 50);

    let (status, _) = send_json(&app, "DELETE", &format!("/classes/{id}"), Some(&leader), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send_json(&app, "GET", "/classes", Some(&creator), None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[serial]
async fn missing_class_is_not_found() {
    let (app, _pool) = make_test_app().await;
    let token = register_and_login(&app, "A", "a@x.com", "pl").await;

    let (status, _) = send_json(
        &app,
        "PUT",
        "/classes/999",
        Some(&token),
        Some(json!({ "venue": "Nowhere" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(&app, "DELETE", "/classes/999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn options_are_filtered_for_lecturers_only() {
    let (app, _pool) = make_test_app().await;
    let mpho = register_and_login(&app, "Mpho", "mpho@x.com", "lecturer").await;
    let lineo = register_and_login(&app, "Lineo", "lineo@x.com", "lecturer").await;
    let prl = register_and_login(&app, "R", "r@x.com", "prl").await;

    create_class(&app, &mpho, "CS101-A", "Dr. Mpho Molapo").await;
    create_class(&app, &lineo, "CS102-B", "Ms. Lineo Khiba").await;

    let (_, body) = send_json(&app, "GET", "/classes/options", Some(&mpho), None).await;
    let options = body.as_array().unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0]["class_name"], "CS101-A");

    let (_, body) = send_json(&app, "GET", "/classes/options", Some(&prl), None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}
