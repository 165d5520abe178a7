pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use model::{Lecturer, LecturerRole};
pub use router::init_lecturers_router;
