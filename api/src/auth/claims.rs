use db::models::user::Role;
use serde::{Deserialize, Serialize};

/// Identity claims carried by every issued token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id.
    pub sub: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

/// A verified caller, extracted from the `Authorization` header.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
