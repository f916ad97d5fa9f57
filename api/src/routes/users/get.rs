use axum::{Json, extract::State, response::IntoResponse};
use db::models::user::User;
use serde::Serialize;

use crate::response::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LecturerListItem {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// GET /lecturers
///
/// Public directory of users with the `lecturer` role, used to populate
/// class-assignment dropdowns.
pub async fn list_lecturers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let lecturers = User::get_lecturers(state.db()).await?;
    let items: Vec<LecturerListItem> = lecturers
        .into_iter()
        .map(|u| LecturerListItem {
            id: u.id,
            name: u.name,
            email: u.email,
        })
        .collect();
    Ok(Json(items))
}
