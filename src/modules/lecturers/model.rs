use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Lecturer role. At most one HOD may exist per department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum LecturerRole {
    Hod,
    Lecturer,
}

impl LecturerRole {
    /// Parses the wire value; anything other than `HOD` / `LECTURER` is
    /// rejected by the registration workflow.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "HOD" => Some(Self::Hod),
            "LECTURER" => Some(Self::Lecturer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hod => "HOD",
            Self::Lecturer => "LECTURER",
        }
    }
}

/// A lecturer record as persisted. The `password` field holds the bcrypt
/// hash; `initial_password` is the generated plaintext kept so the admin
/// can hand it over out-of-band (it is stripped from every lecturer-facing
/// and student-facing read).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Lecturer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub fullname: String,
    #[serde(rename = "type")]
    pub lecturer_type: LecturerRole,
    pub department: String,
    pub title: String,
    pub designation: String,
    pub phone_number: String,
    pub initial_password: String,
    pub password: String,
    pub password_changed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A registration candidate. `type` stays a plain string here so the
/// workflow can reject unknown roles with its own message instead of a
/// body-deserialization error.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewLecturer {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "fullname is required"))]
    pub fullname: String,
    #[serde(rename = "type")]
    pub lecturer_type: String,
    #[validate(length(min = 1, message = "department is required"))]
    pub department: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub phone_number: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterLecturersRequest {
    /// Ordered batch; `None` and `[]` are both rejected as an invalid body.
    #[serde(default)]
    #[validate(nested)]
    pub lecturers: Option<Vec<NewLecturer>>,
}
