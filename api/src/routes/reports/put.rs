use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use common::missing_fields_message;
use db::models::report::ReportRow;
use db::models::user::Role;
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::auth::guards::require_any_role;
use crate::response::ApiError;
use crate::routes::common::push_if_blank;
use crate::routes::reports::shape::ReportView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: Option<String>,
}

/// PUT /reports/{id}
///
/// Attaches principal-lecturer feedback to a report. The feedback is echoed
/// into the response payload only and is NOT persisted; a later fetch of the
/// same report returns no feedback. This ephemeral behavior is part of the
/// current API contract (see DESIGN.md).
///
/// ### Responses
/// - `200 OK` with the reshaped report, `feedback` populated
/// - `400 Bad Request` when `feedback` is missing
/// - `403 Forbidden` for any role other than `prl`
/// - `404 Not Found` when the report does not exist
pub async fn attach_feedback(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<FeedbackRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_any_role(&user, &[Role::Prl], "attach feedback to reports")?;

    let mut missing = Vec::new();
    push_if_blank(&mut missing, "feedback", &req.feedback);
    if !missing.is_empty() {
        return Err(ApiError::Validation(missing_fields_message(&missing)));
    }

    let row = ReportRow::get_by_id(state.db(), id)
        .await?
        .ok_or(ApiError::NotFound("Report"))?;

    Ok(Json(ReportView::from_row(row, req.feedback)))
}
