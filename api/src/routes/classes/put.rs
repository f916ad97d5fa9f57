use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::class::Class;
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::auth::guards::require_class_ownership;
use crate::response::ApiError;
use crate::routes::common::lenient_opt_i64;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateClassRequest {
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

/// PUT /classes/{id}
///
/// Partial update. Allowed for program leaders and the class creator; fields
/// absent from the body keep their stored values.
///
/// ### Responses
/// - `200 OK` with the updated class
/// - `403 Forbidden` when the caller is neither creator nor program leader
/// - `404 Not Found` when the class does not exist
pub async fn update_class(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateClassRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut class = Class::get_by_id(state.db(), id)
        .await?
        .ok_or(ApiError::NotFound("Class"))?;

    require_class_ownership(&user, &class)?;

    if let Some(class_name) = req.class_name {
        class.class_name = class_name;
    }
    if let Some(course_name) = req.course_name {
        class.course_name = course_name;
    }
    if let Some(course_code) = req.course_code {
        class.course_code = course_code;
    }
    if let Some(lecturer) = req.lecturer {
        class.lecturer = lecturer;
    }
    if let Some(schedule) = req.schedule {
        class.schedule = Some(schedule);
    }
    if let Some(venue) = req.venue {
        class.venue = Some(venue);
    }
    if let Some(capacity) = req.capacity {
        class.capacity = Some(capacity);
    }
    if let Some(status) = req.status {
        class.status = status;
    }

    let updated = class.update(state.db()).await?;
    Ok(Json(updated))
}
