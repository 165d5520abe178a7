use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "FIRST" => Some(Self::First),
            "SECOND" => Some(Self::Second),
            _ => None,
        }
    }
}

/// Head/assistant assignment embedded in a course. `extra` carries any
/// additional caller-supplied allocation metadata verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Allocation {
    pub head_lecturer: String,
    pub assistant_lecturer: String,
    pub session: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// A course record as persisted. `is_allocated` starts false and flips to
/// true exactly when an allocation is attached; nothing in the API reverts
/// it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub course_code: String,
    pub course_title: String,
    pub semester: Semester,
    pub is_allocated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation: Option<Allocation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A registration candidate; `semester` stays a string so the workflow can
/// reject unknown values with its own message.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewCourse {
    #[validate(length(min = 1, message = "course_code is required"))]
    pub course_code: String,
    #[validate(length(min = 1, message = "course_title is required"))]
    pub course_title: String,
    pub semester: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterCoursesRequest {
    #[serde(default)]
    #[validate(nested)]
    pub courses: Option<Vec<NewCourse>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AllocateCourseRequest {
    #[validate(length(min = 1, message = "course_id is required"))]
    pub course_id: String,
    #[validate(length(min = 1, message = "head_lecturer is required"))]
    pub head_lecturer: String,
    #[validate(length(min = 1, message = "assistant_lecturer is required"))]
    pub assistant_lecturer: String,
    #[validate(length(min = 1, message = "session is required"))]
    pub session: String,
    /// Additional allocation metadata stored as-is.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}
