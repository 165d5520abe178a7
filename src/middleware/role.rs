//! Role authorization guards.
//!
//! Authorization is never derived from the token's role claim alone: each
//! guard re-reads the principal from storage on every request, so a demoted
//! or deleted account loses access immediately even while its token is
//! still live. Absence of the principal is reported as an authorization
//! failure, not a 404, to avoid leaking which accounts exist.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::middleware::auth::AuthUser;
use crate::modules::lecturers::model::LecturerRole;
use crate::state::AppState;
use crate::store::{COLLECTION_ADMINS, COLLECTION_LECTURERS, object};
use crate::utils::errors::AppError;

/// Layer guard for admin-gated routes: the verified claims must belong to a
/// currently existing Admin record.
///
/// # Usage
///
/// ```rust,ignore
/// Router::new()
///     .nest("/admin", init_lecturers_router())
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match check_admin(&state, req).await {
        Ok(req) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}

/// Layer guard for HOD-gated routes: the verified claims must belong to a
/// current Lecturer whose `type` is HOD.
pub async fn require_hod(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match check_hod(&state, req).await {
        Ok(req) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}

async fn check_admin(state: &AppState, req: Request) -> Result<Request, AppError> {
    let (mut parts, body) = req.into_parts();
    let auth_user = AuthUser::from_request_parts(&mut parts, state).await?;

    let admin = state
        .store
        .find_one(COLLECTION_ADMINS, &object(json!({"email": auth_user.email()})))
        .await?;

    if admin.is_none() {
        return Err(AppError::unauthorized("Invalid credentials!"));
    }

    Ok(Request::from_parts(parts, body))
}

async fn check_hod(state: &AppState, req: Request) -> Result<Request, AppError> {
    let (mut parts, body) = req.into_parts();
    let auth_user = AuthUser::from_request_parts(&mut parts, state).await?;

    let lecturer = state
        .store
        .find_one(
            COLLECTION_LECTURERS,
            &object(json!({"email": auth_user.email()})),
        )
        .await?
        .ok_or_else(|| AppError::unauthorized("user not a lecturer"))?;

    let is_hod = lecturer
        .get("type")
        .and_then(serde_json::Value::as_str)
        .and_then(LecturerRole::parse)
        == Some(LecturerRole::Hod);

    if !is_hod {
        return Err(AppError::unauthorized("lecturer not authorized"));
    }

    Ok(Request::from_parts(parts, body))
}
