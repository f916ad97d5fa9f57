use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::missing_fields_message;
use db::models::class::{Class, NewClass};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::auth::guards::{CLASS_CREATOR_ROLES, require_any_role};
use crate::response::ApiError;
use crate::routes::common::{lenient_opt_i64, push_if_blank};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub class_name: Option<String>,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub lecturer: Option<String>,
    pub schedule: Option<String>,
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub capacity: Option<i64>,
    pub status: Option<String>,
}

/// POST /classes
///
/// Creates a class. Restricted to lecturers, principal reporting lecturers
/// and program leaders; `class_name`, `course_name`, `course_code` and
/// `lecturer` must all be non-empty. `created_by` is stamped with the
/// caller's name and `created_by_id` with the caller's id.
///
/// ### Responses
/// - `201 Created` with the stored class
/// - `400 Bad Request` naming the missing fields
/// - `403 Forbidden` for students
pub async fn create_class(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateClassRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_any_role(&user, CLASS_CREATOR_ROLES, "create classes")?;

    let mut missing = Vec::new();
    push_if_blank(&mut missing, "class_name", &req.class_name);
    push_if_blank(&mut missing, "course_name", &req.course_name);
    push_if_blank(&mut missing, "course_code", &req.course_code);
    push_if_blank(&mut missing, "lecturer", &req.lecturer);
    if !missing.is_empty() {
        return Err(ApiError::Validation(missing_fields_message(&missing)));
    }

    let class = Class::create(
        state.db(),
        NewClass {
            class_name: req.class_name.as_deref().unwrap_or_default(),
            course_name: req.course_name.as_deref().unwrap_or_default(),
            course_code: req.course_code.as_deref().unwrap_or_default(),
            lecturer: req.lecturer.as_deref().unwrap_or_default(),
            schedule: req.schedule.as_deref(),
            venue: req.venue.as_deref(),
            capacity: req.capacity,
            status: req.status.as_deref().unwrap_or("active"),
            created_by: &user.0.name,
            created_by_id: user.0.sub,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(class)))
}
