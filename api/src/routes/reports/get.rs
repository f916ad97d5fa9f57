use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::report::ReportRow;
use db::models::user::Role;

use crate::auth::AuthUser;
use crate::auth::guards::require_report_visibility;
use crate::response::ApiError;
use crate::routes::reports::shape::ReportView;
use crate::state::AppState;

/// GET /reports
///
/// Reports joined with their class and submitter, reshaped into the fixed
/// schema. Lecturers only receive reports they submitted themselves.
pub async fn list_reports(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let submitter_filter = match claims.role {
        Role::Lecturer => Some(claims.sub),
        _ => None,
    };

    let rows = ReportRow::list(state.db(), submitter_filter).await?;
    let views: Vec<ReportView> = rows
        .into_iter()
        .map(|row| ReportView::from_row(row, None))
        .collect();
    Ok(Json(views))
}

/// GET /reports/{id}
///
/// One reshaped report. Lecturers may only fetch their own submissions.
pub async fn get_report(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let row = ReportRow::get_by_id(state.db(), id)
        .await?
        .ok_or(ApiError::NotFound("Report"))?;

    require_report_visibility(&user, &row)?;

    Ok(Json(ReportView::from_row(row, None)))
}
