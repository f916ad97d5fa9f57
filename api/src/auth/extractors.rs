use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::TypedHeader;
use common::config::Config;
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::auth::claims::{AuthUser, Claims};
use crate::response::ApiError;

/// The authorization gate.
///
/// Handlers that take an `AuthUser` argument only run once the request
/// carried a `Bearer` token that passed signature and expiry verification.
///
/// # Errors
/// - `401` when the `Authorization` header is missing or malformed.
/// - `403` when the token is present but invalid or expired.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Unauthenticated)?;

        let token_data = decode::<Claims>(
            bearer.token(),
            &DecodingKey::from_secret(Config::get().jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| ApiError::InvalidToken)?;

        Ok(AuthUser(token_data.claims))
    }
}
