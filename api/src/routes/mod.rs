//! HTTP route entry point.
//!
//! Route groups:
//! - `/register`, `/login` → account creation and token issuance (public)
//! - `/profile` → the caller's own record (bearer)
//! - `/classes` → class CRUD and dropdown options (bearer, role/ownership gated)
//! - `/reports` → report submission, listing and feedback (bearer, role gated)
//! - `/courses` → course CRUD (public, no auth gate)
//! - `/lecturers` → lecturer directory (public)
//! - `/health` → liveness probe (public)

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

pub mod auth;
pub mod classes;
pub mod common;
pub mod courses;
pub mod health;
pub mod reports;
pub mod users;

/// Builds the complete application router.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/register", post(auth::post::register))
        .route("/login", post(auth::post::login))
        .route("/profile", get(auth::get::profile))
        .route(
            "/classes",
            get(classes::get::list_classes).post(classes::post::create_class),
        )
        .route("/classes/options", get(classes::get::list_class_options))
        .route(
            "/classes/{id}",
            put(classes::put::update_class).delete(classes::delete::delete_class),
        )
        .route(
            "/reports",
            get(reports::get::list_reports).post(reports::post::create_report),
        )
        .route(
            "/reports/{id}",
            get(reports::get::get_report).put(reports::put::attach_feedback),
        )
        .route("/lecturers", get(users::get::list_lecturers))
        .route(
            "/courses",
            get(courses::get::list_courses).post(courses::post::create_course),
        )
        .route(
            "/courses/{id}",
            get(courses::get::get_course)
                .put(courses::put::update_course)
                .delete(courses::delete::delete_course),
        )
        .route("/health", get(health::health_check))
        .with_state(state)
}
