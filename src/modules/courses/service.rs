use std::collections::HashSet;

use chrono::Utc;
use serde_json::{Value, json};
use tracing::instrument;

use crate::store::{
    COLLECTION_COURSES, COLLECTION_LECTURERS, Document, Store, StoreError, document_id, object,
    redact, to_document,
};
use crate::utils::errors::AppError;

use super::model::{AllocateCourseRequest, Course, NewCourse, Semester};

/// Fields a course update may never set directly. `is_allocated` and
/// `allocation` only change through the allocation workflow; `id` and
/// `created_at` are immutable.
const PROTECTED_COURSE_FIELDS: &[&str] = &["id", "is_allocated", "allocation", "created_at"];

pub struct CourseService;

impl CourseService {
    /// Registers a batch of courses: sequential validation with early
    /// termination (in-batch sets plus storage lookups for code and title
    /// uniqueness), then a single multi-record insert.
    #[instrument(skip_all, fields(count = candidates.len()))]
    pub async fn register_courses(
        store: &dyn Store,
        candidates: Vec<NewCourse>,
    ) -> Result<Value, AppError> {
        let mut seen_codes = HashSet::new();
        let mut seen_titles = HashSet::new();
        let mut processed: Vec<Document> = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            if seen_codes.contains(&candidate.course_code) {
                return Err(AppError::bad_request(format!(
                    "Duplicate course code: {}",
                    candidate.course_code
                )));
            }
            let code_taken = store
                .find_one(
                    COLLECTION_COURSES,
                    &object(json!({"course_code": &candidate.course_code})),
                )
                .await?
                .is_some();
            if code_taken {
                return Err(AppError::bad_request("Course code already exists"));
            }

            if seen_titles.contains(&candidate.course_title) {
                return Err(AppError::bad_request(format!(
                    "Duplicate course title: {}",
                    candidate.course_title
                )));
            }
            let title_taken = store
                .find_one(
                    COLLECTION_COURSES,
                    &object(json!({"course_title": &candidate.course_title})),
                )
                .await?
                .is_some();
            if title_taken {
                return Err(AppError::bad_request("Course title already exists"));
            }

            let semester = Semester::parse(&candidate.semester)
                .ok_or_else(|| AppError::bad_request("Invalid course semester"))?;

            let now = Utc::now();
            let course = Course {
                id: None,
                course_code: candidate.course_code.clone(),
                course_title: candidate.course_title.clone(),
                semester,
                is_allocated: false,
                allocation: None,
                created_at: now,
                updated_at: now,
            };

            seen_codes.insert(candidate.course_code);
            seen_titles.insert(candidate.course_title);
            processed.push(to_document(&course)?);
        }

        let result = store
            .insert_many(COLLECTION_COURSES, processed.clone())
            .await?;
        if !result.acknowledged {
            return Err(AppError::bad_request("failed to add courses"));
        }

        let registered: Vec<Value> = processed
            .into_iter()
            .zip(result.inserted_ids)
            .map(|(mut doc, id)| {
                doc.insert("id".to_string(), Value::String(id));
                Value::Object(doc)
            })
            .collect();

        Ok(Value::Array(registered))
    }

    #[instrument(skip_all)]
    pub async fn list_courses(store: &dyn Store) -> Result<Value, AppError> {
        let mut courses = Vec::new();
        for doc in store.find(COLLECTION_COURSES, &Document::new(), 50).await? {
            courses.push(Value::Object(resolve_allocation_display(store, doc).await?));
        }
        Ok(Value::Array(courses))
    }

    /// Merges caller-supplied fields into an existing course. Protected
    /// fields are stripped rather than rejected; code/title changes re-check
    /// uniqueness against every course other than this one.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn update_course(
        store: &dyn Store,
        id: &str,
        mut patch: Document,
    ) -> Result<Value, AppError> {
        for field in PROTECTED_COURSE_FIELDS {
            patch.remove(*field);
        }
        if patch.is_empty() {
            return Err(AppError::bad_request("Invalid body param!"));
        }

        store
            .find_one(COLLECTION_COURSES, &object(json!({"id": id})))
            .await?
            .ok_or_else(|| AppError::bad_request("course not found"))?;

        if let Some(code) = patch.get("course_code").and_then(Value::as_str) {
            let other = store
                .find_one(COLLECTION_COURSES, &object(json!({"course_code": code})))
                .await?;
            if other.is_some_and(|doc| document_id(&doc) != Some(id)) {
                return Err(AppError::bad_request("Course code already exists"));
            }
        }
        if let Some(title) = patch.get("course_title").and_then(Value::as_str) {
            let other = store
                .find_one(COLLECTION_COURSES, &object(json!({"course_title": title})))
                .await?;
            if other.is_some_and(|doc| document_id(&doc) != Some(id)) {
                return Err(AppError::bad_request("Course title already exists"));
            }
        }

        patch.insert("updated_at".to_string(), json!(Utc::now()));

        let result = store
            .update_one(COLLECTION_COURSES, &object(json!({"id": id})), patch)
            .await?;
        if !result.acknowledged || result.matched == 0 {
            return Err(AppError::bad_request("failed to update course"));
        }

        let updated = store
            .find_one(COLLECTION_COURSES, &object(json!({"id": id})))
            .await?
            .ok_or_else(|| AppError::internal("something went wrong"))?;

        Ok(Value::Object(
            resolve_allocation_display(store, updated).await?,
        ))
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn delete_course(store: &dyn Store, id: &str) -> Result<Value, AppError> {
        let result = store
            .delete_one(COLLECTION_COURSES, &object(json!({"id": id})))
            .await?;
        if result.deleted == 0 {
            return Err(AppError::not_found("course not found"));
        }
        Ok(Value::Null)
    }

    /// Attaches a head/assistant pair to a course. The allocation
    /// sub-object is replaced wholesale; re-allocating overwrites the
    /// previous assignment with no history kept.
    #[instrument(skip_all, fields(course_id = %dto.course_id))]
    pub async fn allocate_course(
        store: &dyn Store,
        dto: AllocateCourseRequest,
    ) -> Result<Value, AppError> {
        store
            .find_one(COLLECTION_COURSES, &object(json!({"id": &dto.course_id})))
            .await?
            .ok_or_else(|| AppError::bad_request("course not found"))?;

        if dto.head_lecturer == dto.assistant_lecturer {
            return Err(AppError::bad_request(
                "one lecturer cannot head and assist a course",
            ));
        }

        if lecturer_display(store, &dto.head_lecturer).await?.is_none() {
            return Err(AppError::bad_request("head lecturer not found"));
        }
        if lecturer_display(store, &dto.assistant_lecturer)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request("assistant lecturer not found"));
        }

        // Caller-supplied extras first, then the reserved fields so they
        // cannot be shadowed.
        let mut allocation = dto.extra;
        allocation.insert("head_lecturer".to_string(), json!(dto.head_lecturer));
        allocation.insert(
            "assistant_lecturer".to_string(),
            json!(dto.assistant_lecturer),
        );
        allocation.insert("session".to_string(), json!(dto.session));

        let patch = object(json!({
            "is_allocated": true,
            "updated_at": Utc::now(),
            "allocation": allocation,
        }));

        let result = store
            .update_one(
                COLLECTION_COURSES,
                &object(json!({"id": &dto.course_id})),
                patch,
            )
            .await?;
        if !result.acknowledged || result.matched == 0 {
            return Err(AppError::bad_request("failed to allocate course"));
        }

        let updated = store
            .find_one(COLLECTION_COURSES, &object(json!({"id": &dto.course_id})))
            .await?
            .ok_or_else(|| AppError::internal("something went wrong"))?;

        Ok(Value::Object(
            resolve_allocation_display(store, updated).await?,
        ))
    }

    #[instrument(skip_all)]
    pub async fn list_lecturers(store: &dyn Store) -> Result<Value, AppError> {
        let lecturers = store
            .find(COLLECTION_LECTURERS, &Document::new(), 50)
            .await?
            .into_iter()
            .map(|doc| Value::Object(redact(doc, &["password", "initial_password"])))
            .collect();

        Ok(Value::Array(lecturers))
    }
}

/// Resolves a lecturer id to its `{id, name}` display object, or `None`
/// when the id no longer points at a lecturer.
pub async fn lecturer_display(
    store: &dyn Store,
    id: &str,
) -> Result<Option<Value>, StoreError> {
    let lecturer = store
        .find_one(COLLECTION_LECTURERS, &object(json!({"id": id})))
        .await?;

    Ok(lecturer.and_then(|doc| {
        doc.get("fullname")
            .and_then(Value::as_str)
            .map(|name| json!({"id": id, "name": name}))
    }))
}

/// Rewrites an allocated course for display: lifts `session` to the top
/// level, swaps the raw lecturer ids for `{id, name}` display objects, and
/// drops the internal `allocation` sub-object.
///
/// Shared by the allocation write path and every course-read path. A
/// dangling lecturer reference omits the display field; reads never fail on
/// it. No-op for unallocated courses, hence idempotent.
pub async fn resolve_allocation_display(
    store: &dyn Store,
    mut course: Document,
) -> Result<Document, StoreError> {
    if !course
        .get("is_allocated")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        return Ok(course);
    }
    let Some(Value::Object(allocation)) = course.remove("allocation") else {
        return Ok(course);
    };

    if let Some(session) = allocation.get("session") {
        course.insert("session".to_string(), session.clone());
    }

    for field in ["head_lecturer", "assistant_lecturer"] {
        if let Some(id) = allocation.get(field).and_then(Value::as_str)
            && let Some(display) = lecturer_display(store, id).await?
        {
            course.insert(field.to_string(), display);
        }
    }

    Ok(course)
}
