use axum::{Json, extract::State, response::IntoResponse};
use db::models::class::Class;
use db::models::user::Role;

use crate::auth::AuthUser;
use crate::response::ApiError;
use crate::state::AppState;

/// GET /classes
///
/// All classes, newest first. Any authenticated caller.
pub async fn list_classes(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let classes = Class::get_all(state.db()).await?;
    Ok(Json(classes))
}

/// GET /classes/options
///
/// Dropdown projection of all classes. Lecturers only see classes whose
/// `lecturer` field contains their own name (case-insensitive substring —
/// the documented loose-match policy).
pub async fn list_class_options(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let lecturer_filter = match claims.role {
        Role::Lecturer => Some(claims.name.as_str()),
        _ => None,
    };
    let options = Class::get_options(state.db(), lecturer_filter).await?;
    Ok(Json(options))
}
