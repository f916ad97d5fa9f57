use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::{format_validation_errors, missing_fields_message};
use db::models::user::{Role, User};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiError;
use crate::routes::auth::common::UserResponse;
use crate::routes::common::push_if_blank;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: String,
    pub user: UserResponse,
}

/// POST /register
///
/// Creates a user. `role` must be one of `student`, `lecturer`, `prl`, `pl`
/// (case-insensitive, stored lowercase). The password is stored as a salted
/// argon2 hash, never in plaintext.
///
/// ### Responses
/// - `201 Created` with the public user record
/// - `400 Bad Request` naming missing fields, invalid email or invalid role,
///   and also for a duplicate email (preserved status quirk)
/// - `500 Internal Server Error` on store failure
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut missing = Vec::new();
    push_if_blank(&mut missing, "name", &req.name);
    push_if_blank(&mut missing, "email", &req.email);
    push_if_blank(&mut missing, "password", &req.password);
    push_if_blank(&mut missing, "role", &req.role);
    if !missing.is_empty() {
        return Err(ApiError::Validation(missing_fields_message(&missing)));
    }

    req.validate()
        .map_err(|e| ApiError::Validation(format_validation_errors(&e)))?;

    let role: Role = req
        .role
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| {
            ApiError::Validation("Role must be one of: student, lecturer, prl, pl".into())
        })?;

    let name = req.name.as_deref().unwrap_or_default();
    let email = req.email.as_deref().unwrap_or_default();
    let password = req.password.as_deref().unwrap_or_default();

    if User::get_by_email(state.db(), email).await?.is_some() {
        return Err(ApiError::Conflict(
            "A user with this email already exists".into(),
        ));
    }

    let user = User::create(state.db(), name, email, password, role)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                ApiError::Conflict("A user with this email already exists".into())
            } else {
                ApiError::Store(e)
            }
        })?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /login
///
/// Verifies credentials and issues a 24-hour JWT carrying
/// `{id, role, name, email}`. Failure is undifferentiated: the response does
/// not reveal whether the email exists.
///
/// ### Responses
/// - `200 OK` with `{token, expires_at, user}`
/// - `400 Bad Request` naming missing fields
/// - `403 Forbidden` on unknown email or password mismatch
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut missing = Vec::new();
    push_if_blank(&mut missing, "email", &req.email);
    push_if_blank(&mut missing, "password", &req.password);
    if !missing.is_empty() {
        return Err(ApiError::Validation(missing_fields_message(&missing)));
    }

    let email = req.email.as_deref().unwrap_or_default();
    let password = req.password.as_deref().unwrap_or_default();

    let user = User::verify(state.db(), email, password)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let (token, expires_at) = generate_jwt(&user);
    Ok(Json(LoginResponse {
        token,
        expires_at,
        user: UserResponse::from(user),
    }))
}
