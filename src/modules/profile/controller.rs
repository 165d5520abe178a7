use axum::extract::State;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

use super::service::ProfileService;

#[utoipa::path(
    get,
    path = "/lecturer/profile",
    responses(
        (status = 200, description = "Caller's lecturer record, credential fields stripped", body = ApiResponse),
        (status = 404, description = "Token references a lecturer that no longer exists", body = ApiResponse)
    ),
    tag = "Lecturer",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<ApiResponse, AppError> {
    let data = ProfileService::get_profile(state.store.as_ref(), auth_user.uid()).await?;
    Ok(ApiResponse::success("successful", data))
}

#[utoipa::path(
    get,
    path = "/lecturer/courses",
    responses(
        (status = 200, description = "Courses the caller heads or assists", body = ApiResponse),
        (status = 404, description = "Token references a lecturer that no longer exists", body = ApiResponse)
    ),
    tag = "Lecturer",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_my_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<ApiResponse, AppError> {
    let data = ProfileService::get_courses(state.store.as_ref(), auth_user.uid()).await?;
    Ok(ApiResponse::success("successful", data))
}
