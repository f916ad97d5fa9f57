//! Report response shaping.
//!
//! Every report row, whatever the state of its joins, reshapes into the
//! same fixed schema. Missing join data falls back to the labels below, and
//! four fields the data model does not track yet
//! (`total_registered_students`, `venue`, `scheduled_time`, `faculty_name`)
//! are emitted as constants. Those placeholders are part of the API contract
//! of the system this replaces; removing them or deriving them from storage
//! is a schema extension, not a bug fix.

use db::models::report::ReportRow;
use serde::Serialize;

pub const FALLBACK_CLASS_NAME: &str = "Unknown Class";
pub const FALLBACK_COURSE_NAME: &str = "Unknown Course";
pub const FALLBACK_COURSE_CODE: &str = "N/A";
pub const FALLBACK_LECTURER_NAME: &str = "Unknown Lecturer";

// Not tracked in storage; see module docs.
pub const PLACEHOLDER_TOTAL_REGISTERED_STUDENTS: i64 = 100;
pub const PLACEHOLDER_VENUE: &str = "Main Campus";
pub const PLACEHOLDER_SCHEDULED_TIME: &str = "08:00 - 10:00";
pub const PLACEHOLDER_FACULTY_NAME: &str = "Faculty of Information Communication Technology";

/// The fixed public schema for a report.
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub report_id: i64,
    pub class_id: Option<i64>,
    pub class_name: String,
    pub course_name: String,
    pub course_code: String,
    pub lecturer_name: String,
    pub faculty_name: String,
    pub week: i64,
    pub date: String,
    pub topic: String,
    pub learning_outcomes: Option<String>,
    pub recommendations: Option<String>,
    pub actual_students: i64,
    pub total_registered_students: i64,
    pub venue: String,
    pub scheduled_time: String,
    pub submitted_by: i64,
    pub created_at: String,
    /// Only ever populated on the feedback endpoint's response; feedback is
    /// not retained between requests.
    pub feedback: Option<String>,
}

impl ReportView {
    pub fn from_row(row: ReportRow, feedback: Option<String>) -> Self {
        Self {
            report_id: row.report_id,
            class_id: row.class_id,
            class_name: row.class_name.unwrap_or_else(|| FALLBACK_CLASS_NAME.into()),
            course_name: row
                .course_name
                .unwrap_or_else(|| FALLBACK_COURSE_NAME.into()),
            course_code: row
                .course_code
                .unwrap_or_else(|| FALLBACK_COURSE_CODE.into()),
            lecturer_name: row
                .lecturer_name
                .unwrap_or_else(|| FALLBACK_LECTURER_NAME.into()),
            faculty_name: PLACEHOLDER_FACULTY_NAME.into(),
            week: row.week,
            date: row.date,
            topic: row.topic,
            learning_outcomes: row.learning_outcomes,
            recommendations: row.recommendations,
            actual_students: row.actual_students,
            total_registered_students: PLACEHOLDER_TOTAL_REGISTERED_STUDENTS,
            venue: PLACEHOLDER_VENUE.into(),
            scheduled_time: PLACEHOLDER_SCHEDULED_TIME.into(),
            submitted_by: row.submitted_by,
            created_at: row.created_at,
            feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orphan_row() -> ReportRow {
        ReportRow {
            report_id: 9,
            class_id: None,
            week: 4,
            date: "2025-08-18".into(),
            topic: "Routing".into(),
            learning_outcomes: None,
            recommendations: None,
            actual_students: 28,
            submitted_by: 3,
            created_at: "2025-08-18 09:00:00".into(),
            class_name: None,
            course_name: None,
            course_code: None,
            lecturer_name: None,
        }
    }

    #[test]
    fn shaping_is_total_over_null_joins() {
        let view = ReportView::from_row(orphan_row(), None);
        assert_eq!(view.class_name, "Unknown Class");
        assert_eq!(view.course_name, "Unknown Course");
        assert_eq!(view.course_code, "N/A");
        assert_eq!(view.lecturer_name, "Unknown Lecturer");
        assert_eq!(view.faculty_name, PLACEHOLDER_FACULTY_NAME);
        assert_eq!(
            view.total_registered_students,
            PLACEHOLDER_TOTAL_REGISTERED_STUDENTS
        );
        assert!(view.feedback.is_none());
    }

    #[test]
    fn feedback_is_attached_verbatim() {
        let view = ReportView::from_row(orphan_row(), Some("Cover week 3 again".into()));
        assert_eq!(view.feedback.as_deref(), Some("Cover week 3 again"));
    }
}
