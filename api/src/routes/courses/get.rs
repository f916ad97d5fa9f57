use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::course::Course;

use crate::response::ApiError;
use crate::state::AppState;

/// GET /courses
pub async fn list_courses(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let courses = Course::get_all(state.db()).await?;
    Ok(Json(courses))
}

/// GET /courses/{id}
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let course = Course::get_by_id(state.db(), id)
        .await?
        .ok_or(ApiError::NotFound("Course"))?;
    Ok(Json(course))
}
