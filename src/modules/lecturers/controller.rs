use axum::extract::{Path, State};
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::RegisterLecturersRequest;
use super::service::LecturerService;

#[utoipa::path(
    post,
    path = "/admin/lecturers",
    request_body = RegisterLecturersRequest,
    responses(
        (status = 200, description = "Batch registered; initial passwords returned once", body = ApiResponse),
        (status = 400, description = "Validation failure; nothing was written", body = ApiResponse),
        (status = 401, description = "Caller is not an admin", body = ApiResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn register_lecturers(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterLecturersRequest>,
) -> Result<ApiResponse, AppError> {
    let lecturers = match dto.lecturers {
        Some(lecturers) if !lecturers.is_empty() => lecturers,
        _ => return Err(AppError::bad_request("Invalid body param!")),
    };

    let data = LecturerService::register_lecturers(state.store.as_ref(), lecturers).await?;
    Ok(ApiResponse::success("successful", data))
}

#[utoipa::path(
    get,
    path = "/admin/lecturers",
    responses(
        (status = 200, description = "Lecturer list, password hashes stripped", body = ApiResponse),
        (status = 401, description = "Caller is not an admin", body = ApiResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_lecturers(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let data = LecturerService::list_lecturers(state.store.as_ref()).await?;
    Ok(ApiResponse::success("successful", data))
}

#[utoipa::path(
    get,
    path = "/admin/lecturers/{id}",
    params(("id" = String, Path, description = "Lecturer id")),
    responses(
        (status = 200, description = "Lecturer record", body = ApiResponse),
        (status = 400, description = "Unknown lecturer id", body = ApiResponse),
        (status = 401, description = "Caller is not an admin", body = ApiResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_lecturer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse, AppError> {
    let data = LecturerService::get_lecturer(state.store.as_ref(), &id).await?;
    Ok(ApiResponse::success("successful", data))
}
