use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_allocated_course, get_allocated_courses};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/allocated-courses", get(get_allocated_courses))
        .route("/allocated-courses/{id}", get(get_allocated_course))
}
