use axum::extract::{Path, State};
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

use super::service::StudentService;

#[utoipa::path(
    get,
    path = "/student/allocated-courses",
    responses(
        (status = 200, description = "Allocated courses with lecturer display objects", body = ApiResponse)
    ),
    tag = "Student"
)]
#[instrument(skip_all)]
pub async fn get_allocated_courses(
    State(state): State<AppState>,
) -> Result<ApiResponse, AppError> {
    let data = StudentService::list_allocated_courses(state.store.as_ref()).await?;
    Ok(ApiResponse::success("successful", data))
}

#[utoipa::path(
    get,
    path = "/student/allocated-courses/{id}",
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "Allocated course", body = ApiResponse),
        (status = 404, description = "Course missing or not allocated", body = ApiResponse)
    ),
    tag = "Student"
)]
#[instrument(skip_all)]
pub async fn get_allocated_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse, AppError> {
    let data = StudentService::get_allocated_course(state.store.as_ref(), &id).await?;
    Ok(ApiResponse::success("successful", data))
}
