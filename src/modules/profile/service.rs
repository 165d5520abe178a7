use serde_json::{Value, json};
use tracing::instrument;

use crate::modules::courses::service::resolve_allocation_display;
use crate::store::{COLLECTION_COURSES, COLLECTION_LECTURERS, Store, object, redact};
use crate::utils::errors::AppError;

pub struct ProfileService;

impl ProfileService {
    #[instrument(skip_all, fields(uid = %uid))]
    pub async fn get_profile(store: &dyn Store, uid: &str) -> Result<Value, AppError> {
        let lecturer = store
            .find_one(COLLECTION_LECTURERS, &object(json!({"id": uid})))
            .await?
            .ok_or_else(|| AppError::not_found("lecturer not found"))?;

        Ok(Value::Object(redact(
            lecturer,
            &["password", "initial_password"],
        )))
    }

    /// Courses the calling lecturer heads or assists. The store filter is
    /// equality-only, so the head-or-assistant match happens here after
    /// fetching the allocated set.
    #[instrument(skip_all, fields(uid = %uid))]
    pub async fn get_courses(store: &dyn Store, uid: &str) -> Result<Value, AppError> {
        store
            .find_one(COLLECTION_LECTURERS, &object(json!({"id": uid})))
            .await?
            .ok_or_else(|| AppError::not_found("lecturer not found"))?;

        let allocated = store
            .find(COLLECTION_COURSES, &object(json!({"is_allocated": true})), 50)
            .await?;

        let mut courses = Vec::new();
        for doc in allocated {
            let involves_caller = doc
                .get("allocation")
                .and_then(Value::as_object)
                .is_some_and(|allocation| {
                    ["head_lecturer", "assistant_lecturer"].iter().any(|field| {
                        allocation.get(*field).and_then(Value::as_str) == Some(uid)
                    })
                });

            if involves_caller {
                courses.push(Value::Object(resolve_allocation_display(store, doc).await?));
            }
        }

        Ok(Value::Array(courses))
    }
}
