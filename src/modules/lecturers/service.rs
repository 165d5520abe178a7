use std::collections::{HashMap, HashSet};

use chrono::Utc;
use serde_json::{Value, json};
use tracing::instrument;

use crate::store::{
    COLLECTION_LECTURERS, Document, Store, object, redact, to_document,
};
use crate::utils::credentials::{generate_initial_password, is_email_valid};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

use super::model::{Lecturer, LecturerRole, NewLecturer};

pub struct LecturerService;

impl LecturerService {
    /// Registers a batch of lecturers. Validation is sequential with early
    /// termination: the first failing candidate aborts the whole request
    /// before anything is written, then the accepted batch goes in as a
    /// single multi-record insert.
    ///
    /// Duplicate checks run against two layers on purpose: in-memory sets
    /// catch duplicates within this batch, storage lookups catch duplicates
    /// against earlier requests. The same split guards the
    /// one-HOD-per-department rule. There is no isolation between
    /// concurrent batches; that race is accepted for this system's
    /// single-admin usage.
    #[instrument(skip_all, fields(count = candidates.len()))]
    pub async fn register_lecturers(
        store: &dyn Store,
        candidates: Vec<NewLecturer>,
    ) -> Result<Value, AppError> {
        let mut seen_emails = HashSet::new();
        let mut seen_names = HashSet::new();
        // department -> fullname of the HOD claimed earlier in this batch
        let mut batch_hods: HashMap<String, String> = HashMap::new();
        let mut processed: Vec<Document> = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            if !is_email_valid(&candidate.email) {
                return Err(AppError::bad_request("Invalid email address"));
            }

            if seen_emails.contains(&candidate.email) {
                return Err(AppError::bad_request(format!(
                    "Duplicate email: {}",
                    candidate.email
                )));
            }
            let email_taken = store
                .find_one(
                    COLLECTION_LECTURERS,
                    &object(json!({"email": &candidate.email})),
                )
                .await?
                .is_some();
            if email_taken {
                return Err(AppError::bad_request("Email address has been used"));
            }

            if seen_names.contains(&candidate.fullname) {
                return Err(AppError::bad_request(format!(
                    "Duplicate name: {}",
                    candidate.fullname
                )));
            }
            let name_taken = store
                .find_one(
                    COLLECTION_LECTURERS,
                    &object(json!({"fullname": &candidate.fullname})),
                )
                .await?
                .is_some();
            if name_taken {
                return Err(AppError::bad_request("Name already exists"));
            }

            let role = LecturerRole::parse(&candidate.lecturer_type)
                .ok_or_else(|| AppError::bad_request("Invalid lecturer role"))?;

            let initial_password = generate_initial_password(&candidate.fullname)
                .ok_or_else(|| AppError::bad_request("failed to generate password"))?;
            let password_hash = hash_password(&initial_password)?;

            if role == LecturerRole::Hod {
                let department_has_hod = store
                    .find_one(
                        COLLECTION_LECTURERS,
                        &object(json!({
                            "type": LecturerRole::Hod.as_str(),
                            "department": &candidate.department,
                        })),
                    )
                    .await?
                    .is_some();
                if department_has_hod {
                    return Err(AppError::bad_request("department already has an HOD"));
                }
                if batch_hods.contains_key(&candidate.department) {
                    return Err(AppError::bad_request("multiple HODs for one department"));
                }
                batch_hods.insert(candidate.department.clone(), candidate.fullname.clone());
            }

            let now = Utc::now();
            let lecturer = Lecturer {
                id: None,
                email: candidate.email.clone(),
                fullname: candidate.fullname.clone(),
                lecturer_type: role,
                department: candidate.department,
                title: candidate.title,
                designation: candidate.designation,
                phone_number: candidate.phone_number,
                initial_password,
                password: password_hash,
                password_changed: false,
                created_at: now,
                updated_at: now,
            };

            seen_emails.insert(candidate.email);
            seen_names.insert(candidate.fullname);
            processed.push(to_document(&lecturer)?);
        }

        let result = store
            .insert_many(COLLECTION_LECTURERS, processed.clone())
            .await?;
        if !result.acknowledged {
            return Err(AppError::bad_request("failed to add lecturers"));
        }

        // Echo the inserted records with their assigned ids; the hash never
        // leaves the API, but the one-time initial password does.
        let registered: Vec<Value> = processed
            .into_iter()
            .zip(result.inserted_ids)
            .map(|(mut doc, id)| {
                doc.insert("id".to_string(), Value::String(id));
                Value::Object(redact(doc, &["password"]))
            })
            .collect();

        Ok(Value::Array(registered))
    }

    #[instrument(skip_all)]
    pub async fn list_lecturers(store: &dyn Store) -> Result<Value, AppError> {
        let lecturers = store
            .find(COLLECTION_LECTURERS, &Document::new(), 50)
            .await?
            .into_iter()
            .map(|doc| Value::Object(redact(doc, &["password"])))
            .collect();

        Ok(Value::Array(lecturers))
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn get_lecturer(store: &dyn Store, id: &str) -> Result<Value, AppError> {
        let lecturer = store
            .find_one(COLLECTION_LECTURERS, &object(json!({"id": id})))
            .await?
            .ok_or_else(|| AppError::bad_request("failed to get lecturer"))?;

        Ok(Value::Object(redact(lecturer, &["password"])))
    }
}
