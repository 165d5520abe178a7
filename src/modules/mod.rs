pub mod auth;
pub mod courses;
pub mod lecturers;
pub mod profile;
pub mod students;
