use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{admin_login, admin_sign_up, lecturer_login, logout};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/admin/sign-up", post(admin_sign_up))
        .route("/admin/login", post(admin_login))
        .route("/login", post(lecturer_login))
        .route("/logout", get(logout))
}
