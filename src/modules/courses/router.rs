use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

use super::controller::{
    allocate_course, delete_course, get_courses, get_hod_lecturers, register_courses,
    update_course,
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/courses", post(register_courses).get(get_courses))
        .route("/courses/allocate", post(allocate_course))
        .route("/courses/{id}", put(update_course).delete(delete_course))
        .route("/lecturers", get(get_hod_lecturers))
}
