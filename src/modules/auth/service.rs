use serde_json::{Value, json};
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::store::{COLLECTION_ADMINS, COLLECTION_LECTURERS, Store, document_id, object, redact};
use crate::utils::credentials::is_email_valid;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{AdminSignUpRequest, LoginRequest, ROLE_ADMIN};

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn admin_sign_up(
        store: &dyn Store,
        jwt_config: &JwtConfig,
        dto: AdminSignUpRequest,
    ) -> Result<Value, AppError> {
        if !is_email_valid(&dto.email) {
            return Err(AppError::bad_request("Invalid email address"));
        }

        let existing = store
            .find_one(COLLECTION_ADMINS, &object(json!({"email": &dto.email})))
            .await?;
        if existing.is_some() {
            return Err(AppError::bad_request("Email address has been used"));
        }

        let password_hash = hash_password(&dto.password)?;

        let result = store
            .insert_one(
                COLLECTION_ADMINS,
                object(json!({"email": &dto.email, "password": password_hash})),
            )
            .await?;
        if !result.acknowledged {
            return Err(AppError::bad_request("sign up failed"));
        }
        let uid = result
            .inserted_ids
            .first()
            .ok_or_else(|| AppError::internal("something went wrong"))?;

        let access_token = create_access_token(uid, &dto.email, ROLE_ADMIN, jwt_config)?;

        let admin = store
            .find_one(COLLECTION_ADMINS, &object(json!({"email": &dto.email})))
            .await?
            .ok_or_else(|| AppError::internal("something went wrong"))?;

        Ok(json!({
            "access_token": access_token,
            "admin": redact(admin, &["password"]),
        }))
    }

    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn admin_login(
        store: &dyn Store,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<Value, AppError> {
        if !is_email_valid(&dto.email) {
            return Err(AppError::bad_request("Invalid email address"));
        }

        let admin = store
            .find_one(COLLECTION_ADMINS, &object(json!({"email": &dto.email})))
            .await?
            .ok_or_else(|| AppError::not_found("Email or password is incorrect"))?;

        let stored_hash = admin.get("password").and_then(Value::as_str).unwrap_or("");
        if !verify_password(&dto.password, stored_hash) {
            return Err(AppError::not_found("Email or password is incorrect"));
        }

        let uid = document_id(&admin)
            .ok_or_else(|| AppError::internal("something went wrong"))?
            .to_string();
        let access_token = create_access_token(&uid, &dto.email, ROLE_ADMIN, jwt_config)?;

        Ok(json!({
            "access_token": access_token,
            "user_data": redact(admin, &["password"]),
        }))
    }

    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn lecturer_login(
        store: &dyn Store,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<Value, AppError> {
        if !is_email_valid(&dto.email) {
            return Err(AppError::bad_request("Invalid email address"));
        }

        let lecturer = store
            .find_one(COLLECTION_LECTURERS, &object(json!({"email": &dto.email})))
            .await?
            .ok_or_else(|| AppError::not_found("Email or password is incorrect"))?;

        let stored_hash = lecturer
            .get("password")
            .and_then(Value::as_str)
            .unwrap_or("");
        if !verify_password(&dto.password, stored_hash) {
            return Err(AppError::not_found("Email or password is incorrect"));
        }

        let uid = document_id(&lecturer)
            .ok_or_else(|| AppError::internal("something went wrong"))?
            .to_string();
        let role = lecturer
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let access_token = create_access_token(&uid, &dto.email, &role, jwt_config)?;

        Ok(json!({
            "access_token": access_token,
            "user_data": {
                "id": uid,
                "email": dto.email,
                "role": role,
            },
        }))
    }
}
