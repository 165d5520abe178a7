use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Verified session-token payload. `role` is `"admin"` for admins and the
/// lecturer's `type` (`"HOD"` / `"LECTURER"`) for lecturers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub uid: String,
    pub email: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

/// Role value carried in admin tokens.
pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdminSignUpRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
