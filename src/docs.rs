use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{AdminSignUpRequest, Claims, LoginRequest};
use crate::modules::courses::model::{
    AllocateCourseRequest, Allocation, Course, NewCourse, RegisterCoursesRequest, Semester,
};
use crate::modules::lecturers::model::{
    Lecturer, LecturerRole, NewLecturer, RegisterLecturersRequest,
};
use crate::utils::response::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::admin_sign_up,
        crate::modules::auth::controller::admin_login,
        crate::modules::auth::controller::lecturer_login,
        crate::modules::auth::controller::logout,
        crate::modules::lecturers::controller::register_lecturers,
        crate::modules::lecturers::controller::get_lecturers,
        crate::modules::lecturers::controller::get_lecturer,
        crate::modules::courses::controller::register_courses,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::allocate_course,
        crate::modules::courses::controller::get_hod_lecturers,
        crate::modules::profile::controller::get_profile,
        crate::modules::profile::controller::get_my_courses,
        crate::modules::students::controller::get_allocated_courses,
        crate::modules::students::controller::get_allocated_course,
    ),
    components(schemas(
        ApiResponse,
        Claims,
        AdminSignUpRequest,
        LoginRequest,
        Lecturer,
        LecturerRole,
        NewLecturer,
        RegisterLecturersRequest,
        Course,
        Semester,
        Allocation,
        NewCourse,
        RegisterCoursesRequest,
        AllocateCourseRequest,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Admin and lecturer authentication"),
        (name = "Admin", description = "Lecturer registration and lookup"),
        (name = "HOD", description = "Course registration, update and allocation"),
        (name = "Lecturer", description = "Lecturer self-service"),
        (name = "Student", description = "Allocation results")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
