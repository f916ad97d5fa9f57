use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::DbError;

/// A row in the `classes` table.
///
/// `created_by` keeps the creator's display name for response compatibility;
/// ownership checks are keyed on `created_by_id`, the stable user id.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Class {
    pub id: i64,
    pub class_name: String,
    pub course_name: String,
    pub course_code: String,
    pub lecturer: String,
    pub schedule: Option<String>,
    pub venue: Option<String>,
    pub capacity: Option<i64>,
    pub status: String,
    pub created_by: String,
    pub created_by_id: i64,
    pub created_at: String,
}

/// Fields accepted when creating a class.
#[derive(Debug)]
pub struct NewClass<'a> {
    pub class_name: &'a str,
    pub course_name: &'a str,
    pub course_code: &'a str,
    pub lecturer: &'a str,
    pub schedule: Option<&'a str>,
    pub venue: Option<&'a str>,
    pub capacity: Option<i64>,
    pub status: &'a str,
    pub created_by: &'a str,
    pub created_by_id: i64,
}

/// Slim projection used for dropdown options.
#[derive(Debug, Serialize, FromRow)]
pub struct ClassOption {
    pub id: i64,
    pub class_name: String,
    pub course_name: String,
    pub course_code: String,
    pub lecturer: String,
}

impl Class {
    pub async fn create(pool: &SqlitePool, new: NewClass<'_>) -> Result<Self, DbError> {
        let class = sqlx::query_as::<_, Class>(
            r#"
            INSERT INTO classes
                (class_name, course_name, course_code, lecturer, schedule,
                 venue, capacity, status, created_by, created_by_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(new.class_name)
        .bind(new.course_name)
        .bind(new.course_code)
        .bind(new.lecturer)
        .bind(new.schedule)
        .bind(new.venue)
        .bind(new.capacity)
        .bind(new.status)
        .bind(new.created_by)
        .bind(new.created_by_id)
        .fetch_one(pool)
        .await?;

        Ok(class)
    }

    /// All classes, newest first.
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Self>, DbError> {
        let classes = sqlx::query_as::<_, Class>(
            "SELECT * FROM classes ORDER BY datetime(created_at) DESC, id DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(classes)
    }

    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, DbError> {
        let class = sqlx::query_as::<_, Class>("SELECT * FROM classes WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(class)
    }

    /// Dropdown options. When `lecturer_name` is given, keeps only classes
    /// whose `lecturer` field contains it, case-insensitively. Substring
    /// matching is the documented policy here, imprecise as it is when
    /// lecturer names overlap.
    pub async fn get_options(
        pool: &SqlitePool,
        lecturer_name: Option<&str>,
    ) -> Result<Vec<ClassOption>, DbError> {
        let options = match lecturer_name {
            Some(name) => {
                sqlx::query_as::<_, ClassOption>(
                    r#"
                    SELECT id, class_name, course_name, course_code, lecturer
                    FROM classes
                    WHERE lower(lecturer) LIKE '%' || lower(?) || '%'
                    ORDER BY id
                    "#,
                )
                .bind(name)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ClassOption>(
                    "SELECT id, class_name, course_name, course_code, lecturer FROM classes ORDER BY id",
                )
                .fetch_all(pool)
                .await?
            }
        };
        Ok(options)
    }

    /// Writes back every mutable column. Callers merge the patch into a
    /// fetched row first, so this is the second half of a partial update.
    pub async fn update(&self, pool: &SqlitePool) -> Result<Self, DbError> {
        let class = sqlx::query_as::<_, Class>(
            r#"
            UPDATE classes SET
                class_name = ?, course_name = ?, course_code = ?, lecturer = ?,
                schedule = ?, venue = ?, capacity = ?, status = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&self.class_name)
        .bind(&self.course_name)
        .bind(&self.course_code)
        .bind(&self.lecturer)
        .bind(&self.schedule)
        .bind(&self.venue)
        .bind(self.capacity)
        .bind(&self.status)
        .bind(self.id)
        .fetch_one(pool)
        .await?;

        Ok(class)
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM classes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
