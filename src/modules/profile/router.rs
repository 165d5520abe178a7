use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_my_courses, get_profile};

pub fn init_profile_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/courses", get(get_my_courses))
}
