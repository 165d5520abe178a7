use axum::Json;
use axum::extract::{Path, State};
use serde_json::Value;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{AllocateCourseRequest, RegisterCoursesRequest};
use super::service::CourseService;

#[utoipa::path(
    post,
    path = "/hod/courses",
    request_body = RegisterCoursesRequest,
    responses(
        (status = 200, description = "Batch registered", body = ApiResponse),
        (status = 400, description = "Validation failure; nothing was written", body = ApiResponse),
        (status = 401, description = "Caller is not an HOD", body = ApiResponse)
    ),
    tag = "HOD",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn register_courses(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterCoursesRequest>,
) -> Result<ApiResponse, AppError> {
    let courses = match dto.courses {
        Some(courses) if !courses.is_empty() => courses,
        _ => return Err(AppError::bad_request("Invalid body param!")),
    };

    let data = CourseService::register_courses(state.store.as_ref(), courses).await?;
    Ok(ApiResponse::success("successful", data))
}

#[utoipa::path(
    get,
    path = "/hod/courses",
    responses(
        (status = 200, description = "Course list with allocation display", body = ApiResponse),
        (status = 401, description = "Caller is not an HOD", body = ApiResponse)
    ),
    tag = "HOD",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_courses(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let data = CourseService::list_courses(state.store.as_ref()).await?;
    Ok(ApiResponse::success("successful", data))
}

/// Partial update; any JSON object body is accepted and protected fields
/// are stripped server-side.
#[utoipa::path(
    put,
    path = "/hod/courses/{id}",
    params(("id" = String, Path, description = "Course id")),
    request_body = Value,
    responses(
        (status = 200, description = "Updated course", body = ApiResponse),
        (status = 400, description = "Unknown course or duplicate code/title", body = ApiResponse),
        (status = 401, description = "Caller is not an HOD", body = ApiResponse)
    ),
    tag = "HOD",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<ApiResponse, AppError> {
    let patch = match body {
        Value::Object(map) => map,
        _ => return Err(AppError::bad_request("Invalid body param!")),
    };

    let data = CourseService::update_course(state.store.as_ref(), &id, patch).await?;
    Ok(ApiResponse::success("successful", data))
}

#[utoipa::path(
    delete,
    path = "/hod/courses/{id}",
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted", body = ApiResponse),
        (status = 404, description = "Unknown course", body = ApiResponse),
        (status = 401, description = "Caller is not an HOD", body = ApiResponse)
    ),
    tag = "HOD",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse, AppError> {
    let data = CourseService::delete_course(state.store.as_ref(), &id).await?;
    Ok(ApiResponse::success("successful", data))
}

#[utoipa::path(
    post,
    path = "/hod/courses/allocate",
    request_body = AllocateCourseRequest,
    responses(
        (status = 200, description = "Allocated course with display fields", body = ApiResponse),
        (status = 400, description = "Unknown course/lecturer or head equals assistant", body = ApiResponse),
        (status = 401, description = "Caller is not an HOD", body = ApiResponse)
    ),
    tag = "HOD",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn allocate_course(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AllocateCourseRequest>,
) -> Result<ApiResponse, AppError> {
    let data = CourseService::allocate_course(state.store.as_ref(), dto).await?;
    Ok(ApiResponse::success("successful", data))
}

#[utoipa::path(
    get,
    path = "/hod/lecturers",
    responses(
        (status = 200, description = "Lecturer list without credential fields", body = ApiResponse),
        (status = 401, description = "Caller is not an HOD", body = ApiResponse)
    ),
    tag = "HOD",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_hod_lecturers(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let data = CourseService::list_lecturers(state.store.as_ref()).await?;
    Ok(ApiResponse::success("successful", data))
}
