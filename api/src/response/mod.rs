//! Error taxonomy for the HTTP boundary.
//!
//! Every failure a handler can produce is converted into a JSON body of the
//! form `{ "error": <message> }` with the status codes below. Two quirks are
//! preserved from the system this replaces and are called out in DESIGN.md:
//! duplicate unique fields answer 400 rather than 409, and store failures
//! echo the underlying database message to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or invalid request fields.
    #[error("{0}")]
    Validation(String),

    /// No usable bearer credential on the request.
    #[error("Missing or invalid Authorization header")]
    Unauthenticated,

    /// The bearer token failed signature or expiry checks.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Login failure; deliberately does not reveal whether the email exists.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Valid identity, insufficient privilege.
    #[error("{0}")]
    Forbidden(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    /// Duplicate unique field.
    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Store(#[from] db::DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken | ApiError::InvalidCredentials | ApiError::Forbidden(_) => {
                StatusCode::FORBIDDEN
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            // Clients treat duplicates as a plain 400, not 409.
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(e) = &self {
            tracing::error!("store failure: {e}");
        }
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
