use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::DbError;

const JOINED_SELECT: &str = r#"
    SELECT r.report_id, r.class_id, r.week, r.date, r.topic,
           r.learning_outcomes, r.recommendations, r.actual_students,
           r.submitted_by, r.created_at,
           c.class_name, c.course_name, c.course_code,
           u.name AS lecturer_name
    FROM report r
    LEFT JOIN classes c ON c.id = r.class_id
    LEFT JOIN users u ON u.id = r.submitted_by
"#;

/// A `report` row joined with its class and submitter. The joined columns
/// are `Option` because the joins are LEFT JOINs; response shaping supplies
/// the fallback labels.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReportRow {
    pub report_id: i64,
    pub class_id: Option<i64>,
    pub week: i64,
    pub date: String,
    pub topic: String,
    pub learning_outcomes: Option<String>,
    pub recommendations: Option<String>,
    pub actual_students: i64,
    pub submitted_by: i64,
    pub created_at: String,
    pub class_name: Option<String>,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub lecturer_name: Option<String>,
}

/// Fields accepted when submitting a report.
#[derive(Debug)]
pub struct NewReport<'a> {
    pub class_id: i64,
    pub week: i64,
    pub date: &'a str,
    pub topic: &'a str,
    pub learning_outcomes: Option<&'a str>,
    pub recommendations: Option<&'a str>,
    pub actual_students: i64,
    pub submitted_by: i64,
}

impl ReportRow {
    /// Inserts the report and returns it joined with class and submitter.
    pub async fn create(pool: &SqlitePool, new: NewReport<'_>) -> Result<Self, DbError> {
        let report_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO report
                (class_id, week, date, topic, learning_outcomes,
                 recommendations, actual_students, submitted_by)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING report_id
            "#,
        )
        .bind(new.class_id)
        .bind(new.week)
        .bind(new.date)
        .bind(new.topic)
        .bind(new.learning_outcomes)
        .bind(new.recommendations)
        .bind(new.actual_students)
        .bind(new.submitted_by)
        .fetch_one(pool)
        .await?;

        let row = Self::get_by_id(pool, report_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        Ok(row)
    }

    pub async fn get_by_id(pool: &SqlitePool, report_id: i64) -> Result<Option<Self>, DbError> {
        let sql = format!("{JOINED_SELECT} WHERE r.report_id = ?");
        let row = sqlx::query_as::<_, ReportRow>(&sql)
            .bind(report_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// All reports, or only those submitted by `submitted_by`, newest first.
    pub async fn list(
        pool: &SqlitePool,
        submitted_by: Option<i64>,
    ) -> Result<Vec<Self>, DbError> {
        let rows = match submitted_by {
            Some(user_id) => {
                let sql = format!(
                    "{JOINED_SELECT} WHERE r.submitted_by = ? \
                     ORDER BY datetime(r.created_at) DESC, r.report_id DESC"
                );
                sqlx::query_as::<_, ReportRow>(&sql)
                    .bind(user_id)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let sql = format!(
                    "{JOINED_SELECT} ORDER BY datetime(r.created_at) DESC, r.report_id DESC"
                );
                sqlx::query_as::<_, ReportRow>(&sql).fetch_all(pool).await?
            }
        };
        Ok(rows)
    }
}
