pub mod claims;
pub mod extractors;
pub mod guards;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use common::config::Config;
use db::models::user::User;
use jsonwebtoken::{EncodingKey, Header, encode};

/// Generates a signed JWT for `user` along with its RFC 3339 expiry.
///
/// Token lifetime comes from `JWT_DURATION_MINUTES` (default 24 hours).
pub fn generate_jwt(user: &User) -> (String, String) {
    let config = Config::get();

    let expiry = Utc::now() + Duration::minutes(config.jwt_duration_minutes);
    let claims = Claims {
        sub: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role,
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .expect("Token encoding failed");

    (token, expiry.to_rfc3339())
}
