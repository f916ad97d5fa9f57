pub mod models;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;

/// Errors surfaced by the model layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),
}

impl From<argon2::password_hash::Error> for DbError {
    fn from(e: argon2::password_hash::Error) -> Self {
        DbError::PasswordHash(e)
    }
}

impl DbError {
    /// True when the underlying driver reported a unique-constraint
    /// violation, e.g. a duplicate email on `users`.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DbError::Sqlx(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

/// Connects to the SQLite database named by `database_url`, creating the
/// file (and parent directories) if needed.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let path = database_url.trim_start_matches("sqlite://");
    if path != ":memory:" {
        if let Some(parent) = Path::new(path).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new().connect_with(options).await
}

/// Applies the schema. Idempotent; run once at startup.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            class_name TEXT NOT NULL,
            course_name TEXT NOT NULL,
            course_code TEXT NOT NULL,
            lecturer TEXT NOT NULL,
            schedule TEXT,
            venue TEXT,
            capacity INTEGER,
            status TEXT NOT NULL DEFAULT 'active',
            created_by TEXT NOT NULL,
            created_by_id INTEGER NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        -- class_id and submitted_by carry no foreign keys: reports must
        -- outlive their class, and response shaping handles the resulting
        -- null joins.
        CREATE TABLE IF NOT EXISTS report (
            report_id INTEGER PRIMARY KEY AUTOINCREMENT,
            class_id INTEGER,
            week INTEGER NOT NULL,
            date TEXT NOT NULL,
            topic TEXT NOT NULL,
            learning_outcomes TEXT,
            recommendations TEXT,
            actual_students INTEGER NOT NULL,
            submitted_by INTEGER NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            course_id INTEGER PRIMARY KEY AUTOINCREMENT,
            course_code TEXT NOT NULL,
            course_name TEXT NOT NULL,
            faculty TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Fresh in-memory database with the schema applied. A single connection is
/// used so every query in a test sees the same `:memory:` instance.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    migrate(&pool).await.expect("Failed to apply schema");
    pool
}
