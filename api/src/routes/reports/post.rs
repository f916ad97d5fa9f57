use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::missing_fields_message;
use db::models::report::{NewReport, ReportRow};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::response::ApiError;
use crate::routes::common::{lenient_opt_i64, push_if_blank};
use crate::routes::reports::shape::ReportView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateReportRequest {
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub class_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub week: Option<i64>,
    pub date: Option<String>,
    pub topic: Option<String>,
    pub learning_outcomes: Option<String>,
    pub recommendations: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub actual_students: Option<i64>,
}

/// POST /reports
///
/// Submits a lecture report for a class. Any authenticated caller;
/// `submitted_by` is stamped with the caller's id. `class_id`, `week`,
/// `date`, `topic` and `actual_students` are required and the 400 response
/// names whichever are missing.
///
/// ### Responses
/// - `201 Created` with the reshaped report, joined with class and submitter
/// - `400 Bad Request` naming the missing fields
pub async fn create_report(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreateReportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut missing = Vec::new();
    if req.class_id.is_none() {
        missing.push("class_id");
    }
    if req.week.is_none() {
        missing.push("week");
    }
    push_if_blank(&mut missing, "date", &req.date);
    push_if_blank(&mut missing, "topic", &req.topic);
    if req.actual_students.is_none() {
        missing.push("actual_students");
    }
    if !missing.is_empty() {
        return Err(ApiError::Validation(missing_fields_message(&missing)));
    }

    let row = ReportRow::create(
        state.db(),
        NewReport {
            class_id: req.class_id.unwrap_or_default(),
            week: req.week.unwrap_or_default(),
            date: req.date.as_deref().unwrap_or_default(),
            topic: req.topic.as_deref().unwrap_or_default(),
            learning_outcomes: req.learning_outcomes.as_deref(),
            recommendations: req.recommendations.as_deref(),
            actual_students: req.actual_students.unwrap_or_default(),
            submitted_by: claims.sub,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(ReportView::from_row(row, None))))
}
