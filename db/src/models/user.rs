use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use std::fmt;
use std::str::FromStr;

use crate::DbError;

/// Closed set of account roles. Stored lowercase in the `role` column and
/// serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Student,
    Lecturer,
    /// Principal Reporting Lecturer: may attach feedback to reports.
    Prl,
    /// Program Leader: may edit or delete any class.
    Pl,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Lecturer => "lecturer",
            Role::Prl => "prl",
            Role::Pl => "pl",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    /// Case-insensitive; registration input is normalized through here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "lecturer" => Ok(Role::Lecturer),
            "prl" => Ok(Role::Prl),
            "pl" => Ok(Role::Pl),
            _ => Err(()),
        }
    }
}

/// A row in the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: String,
}

impl User {
    /// Inserts a new user, storing a salted argon2 hash of `password`.
    pub async fn create(
        pool: &SqlitePool,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Self, DbError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, password_hash, role, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(&password_hash)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, DbError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>, DbError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Checks `password` against the stored hash. Returns `Ok(None)` both
    /// when the email is unknown and when the password does not match, so
    /// callers cannot tell the two apart.
    pub async fn verify(
        pool: &SqlitePool,
        email: &str,
        password: &str,
    ) -> Result<Option<Self>, DbError> {
        let Some(user) = Self::get_by_email(pool, email).await? else {
            return Ok(None);
        };

        let parsed_hash = PasswordHash::new(&user.password_hash)?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(Some(user)),
            Err(argon2::password_hash::Error::Password) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_lecturers(pool: &SqlitePool) -> Result<Vec<Self>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users WHERE role = 'lecturer'")
            .fetch_all(pool)
            .await?;
        Ok(users)
    }
}
