use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Response envelope used by every endpoint:
/// `{status: bool, data: any | null, message: string}`.
///
/// Errors produce the same shape with `status = false` via
/// [`crate::utils::errors::AppError`].
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse {
    pub status: bool,
    #[schema(value_type = Object)]
    pub data: Value,
    pub message: String,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>, data: impl Into<Value>) -> Self {
        Self {
            status: true,
            data: data.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
