use axum::{Json, extract::State, response::IntoResponse};
use db::models::user::User;

use crate::auth::AuthUser;
use crate::response::ApiError;
use crate::routes::auth::common::UserResponse;
use crate::state::AppState;

/// GET /profile
///
/// Returns the caller's own user record, looked up fresh from the store so
/// the response reflects the row rather than the token claims.
pub async fn profile(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let user = User::get_by_id(state.db(), claims.sub)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(UserResponse::from(user)))
}
