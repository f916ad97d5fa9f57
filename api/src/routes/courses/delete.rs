use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::course::Course;
use serde_json::json;

use crate::response::ApiError;
use crate::state::AppState;

/// DELETE /courses/{id}
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    Course::get_by_id(state.db(), id)
        .await?
        .ok_or(ApiError::NotFound("Course"))?;

    Course::delete_by_id(state.db(), id).await?;
    Ok(Json(json!({ "message": "Course deleted" })))
}
