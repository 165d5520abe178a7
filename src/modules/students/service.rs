use serde_json::{Value, json};
use tracing::instrument;

use crate::modules::courses::service::resolve_allocation_display;
use crate::store::{COLLECTION_COURSES, Store, object};
use crate::utils::errors::AppError;

pub struct StudentService;

impl StudentService {
    #[instrument(skip_all)]
    pub async fn list_allocated_courses(store: &dyn Store) -> Result<Value, AppError> {
        let allocated = store
            .find(COLLECTION_COURSES, &object(json!({"is_allocated": true})), 50)
            .await?;

        let mut courses = Vec::new();
        for doc in allocated {
            courses.push(Value::Object(resolve_allocation_display(store, doc).await?));
        }

        Ok(Value::Array(courses))
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn get_allocated_course(store: &dyn Store, id: &str) -> Result<Value, AppError> {
        let course = store
            .find_one(
                COLLECTION_COURSES,
                &object(json!({"id": id, "is_allocated": true})),
            )
            .await?
            .ok_or_else(|| AppError::not_found("course not found"))?;

        Ok(Value::Object(
            resolve_allocation_display(store, course).await?,
        ))
    }
}
