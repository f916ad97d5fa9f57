use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::DbError;

/// A row in the `courses` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub course_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub faculty: Option<String>,
}

impl Course {
    pub async fn create(
        pool: &SqlitePool,
        course_code: Option<&str>,
        course_name: Option<&str>,
        faculty: Option<&str>,
    ) -> Result<Self, DbError> {
        // No field validation here: NOT NULL constraints on the table are
        // the only guard, matching the open courses surface.
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (course_code, course_name, faculty)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(course_code)
        .bind(course_name)
        .bind(faculty)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Self>, DbError> {
        let courses = sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY course_id")
            .fetch_all(pool)
            .await?;
        Ok(courses)
    }

    pub async fn get_by_id(pool: &SqlitePool, course_id: i64) -> Result<Option<Self>, DbError> {
        let course = sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE course_id = ?")
            .bind(course_id)
            .fetch_optional(pool)
            .await?;
        Ok(course)
    }

    pub async fn update(&self, pool: &SqlitePool) -> Result<Self, DbError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses SET course_code = ?, course_name = ?, faculty = ?
            WHERE course_id = ?
            RETURNING *
            "#,
        )
        .bind(&self.course_code)
        .bind(&self.course_name)
        .bind(&self.faculty)
        .bind(self.course_id)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    pub async fn delete_by_id(pool: &SqlitePool, course_id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM courses WHERE course_id = ?")
            .bind(course_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_test_pool;

    #[tokio::test]
    async fn crud_round_trip() {
        let pool = create_test_pool().await;

        let mut course = Course::create(
            &pool,
            Some("DIWA2110"),
            Some("Web Application Development"),
            Some("Faculty of Information Communication Technology"),
        )
        .await
        .unwrap();

        assert_eq!(Course::get_all(&pool).await.unwrap().len(), 1);

        course.course_name = "Web Application Development II".into();
        let updated = course.update(&pool).await.unwrap();
        assert_eq!(updated.course_name, "Web Application Development II");

        Course::delete_by_id(&pool, course.course_id).await.unwrap();
        assert!(Course::get_by_id(&pool, course.course_id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn missing_required_column_is_a_store_error() {
        let pool = create_test_pool().await;
        let err = Course::create(&pool, None, Some("Orphan"), None).await;
        assert!(err.is_err());
    }
}
