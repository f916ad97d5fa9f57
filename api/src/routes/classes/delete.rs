use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::class::Class;
use serde_json::json;

use crate::auth::AuthUser;
use crate::auth::guards::require_class_ownership;
use crate::response::ApiError;
use crate::state::AppState;

/// DELETE /classes/{id}
///
/// Same ownership rule as update: program leader or class creator.
pub async fn delete_class(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let class = Class::get_by_id(state.db(), id)
        .await?
        .ok_or(ApiError::NotFound("Class"))?;

    require_class_ownership(&user, &class)?;

    Class::delete_by_id(state.db(), id).await?;
    Ok(Json(json!({ "message": "Class deleted" })))
}
