use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::course::Course;

use crate::response::ApiError;
use crate::routes::courses::post::CourseRequest;
use crate::state::AppState;

/// PUT /courses/{id}
///
/// Partial merge update; absent fields keep their stored values.
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut course = Course::get_by_id(state.db(), id)
        .await?
        .ok_or(ApiError::NotFound("Course"))?;

    if let Some(course_code) = req.course_code {
        course.course_code = course_code;
    }
    if let Some(course_name) = req.course_name {
        course.course_name = course_name;
    }
    if let Some(faculty) = req.faculty {
        course.faculty = Some(faculty);
    }

    let updated = course.update(state.db()).await?;
    Ok(Json(updated))
}
