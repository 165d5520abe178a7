use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{TokenVerification, verify_token};

/// Extractor that verifies the bearer token and provides the caller's
/// claims.
///
/// Failure modes, in order of detection:
/// - no `Authorization` header → 401 "No credentials sent!"
/// - header without a token after the scheme → 401 "Invalid auth credentials!"
/// - structurally valid token past its expiry → 400 "token expired"
/// - anything else untrusted (bad signature, malformed) → 401 "Invalid auth
///   credentials!"
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn uid(&self) -> &str {
        &self.0.uid
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> &str {
        &self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("No credentials sent!"))?;

        // Scheme first, token second; anything shorter is malformed.
        let token = auth_header
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| AppError::unauthorized("Invalid auth credentials!"))?;

        match verify_token(token, &state.jwt_config) {
            TokenVerification::Valid(claims) => Ok(AuthUser(claims)),
            TokenVerification::Expired => Err(AppError::bad_request("token expired")),
            TokenVerification::Invalid => {
                Err(AppError::unauthorized("Invalid auth credentials!"))
            }
        }
    }
}
