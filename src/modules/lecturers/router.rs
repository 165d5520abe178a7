use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_lecturer, get_lecturers, register_lecturers};

pub fn init_lecturers_router() -> Router<AppState> {
    Router::new()
        .route("/lecturers", post(register_lecturers).get(get_lecturers))
        .route("/lecturers/{id}", get(get_lecturer))
}
