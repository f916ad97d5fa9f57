use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::course::Course;
use serde::Deserialize;

use crate::response::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CourseRequest {
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub faculty: Option<String>,
}

/// POST /courses
///
/// Pass-through create: body fields go straight to the store and the store's
/// NOT NULL constraints are the only validation, so a missing code or name
/// surfaces as a 500 store error.
pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let course = Course::create(
        state.db(),
        req.course_code.as_deref(),
        req.course_name.as_deref(),
        req.faculty.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(course)))
}
