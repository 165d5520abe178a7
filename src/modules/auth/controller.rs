use axum::extract::State;
use serde_json::Value;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{AdminSignUpRequest, LoginRequest};
use super::service::AuthService;

#[utoipa::path(
    post,
    path = "/auth/admin/sign-up",
    request_body = AdminSignUpRequest,
    responses(
        (status = 200, description = "Admin created; returns access token and profile", body = ApiResponse),
        (status = 400, description = "Invalid or already-used email", body = ApiResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip_all)]
pub async fn admin_sign_up(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AdminSignUpRequest>,
) -> Result<ApiResponse, AppError> {
    let data = AuthService::admin_sign_up(state.store.as_ref(), &state.jwt_config, dto).await?;
    Ok(ApiResponse::success("successful", data))
}

#[utoipa::path(
    post,
    path = "/auth/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse),
        (status = 404, description = "Email or password is incorrect", body = ApiResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip_all)]
pub async fn admin_login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<ApiResponse, AppError> {
    let data = AuthService::admin_login(state.store.as_ref(), &state.jwt_config, dto).await?;
    Ok(ApiResponse::success("successful", data))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Lecturer login successful", body = ApiResponse),
        (status = 404, description = "Email or password is incorrect", body = ApiResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip_all)]
pub async fn lecturer_login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<ApiResponse, AppError> {
    let data = AuthService::lecturer_login(state.store.as_ref(), &state.jwt_config, dto).await?;
    Ok(ApiResponse::success("successful", data))
}

/// Tokens are self-contained and there is no revocation list; logout is a
/// client-side discard acknowledged by the server.
#[utoipa::path(
    get,
    path = "/auth/logout",
    responses((status = 200, description = "Logged out", body = ApiResponse)),
    tag = "Auth"
)]
#[instrument(skip_all)]
pub async fn logout() -> ApiResponse {
    ApiResponse::success("successful", Value::Null)
}
