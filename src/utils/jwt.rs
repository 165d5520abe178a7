use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use tracing::error;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

/// Outcome of token verification. Expired and invalid are distinct,
/// user-facing failure modes (400 vs 401), so the distinction is carried in
/// the type rather than a sentinel value.
#[derive(Debug)]
pub enum TokenVerification {
    Valid(Claims),
    Expired,
    Invalid,
}

pub fn create_access_token(
    uid: &str,
    email: &str,
    role: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        uid: uid.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        iat: now as usize,
        exp: (now + jwt_config.access_token_expiry) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| {
        error!(error = %e, "failed to sign access token");
        AppError::internal("something went wrong")
    })
}

pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> TokenVerification {
    let mut validation = Validation::default();
    // Expiry must surface as its own outcome, not disappear into the
    // default clock-skew allowance.
    validation.leeway = 0;

    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    ) {
        Ok(data) => TokenVerification::Valid(data.claims),
        Err(err) if matches!(err.kind(), ErrorKind::ExpiredSignature) => {
            TokenVerification::Expired
        }
        Err(_) => TokenVerification::Invalid,
    }
}
