#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use coursealloc::config::cors::CorsConfig;
use coursealloc::config::jwt::JwtConfig;
use coursealloc::router::init_router;
use coursealloc::state::AppState;
use coursealloc::store::memory::MemoryStore;
use coursealloc::store::{
    COLLECTION_ADMINS, COLLECTION_COURSES, COLLECTION_LECTURERS, object,
};
use coursealloc::utils::jwt::create_access_token;
use coursealloc::utils::password::hash_password;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_state() -> AppState {
    AppState {
        store: Arc::new(MemoryStore::new()),
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    }
}

pub fn test_app(state: &AppState) -> Router {
    init_router(state.clone())
}

pub async fn seed_admin(state: &AppState, email: &str, password: &str) -> String {
    let hash = hash_password(password).unwrap();
    state
        .store
        .insert_one(
            COLLECTION_ADMINS,
            object(json!({"email": email, "password": hash})),
        )
        .await
        .unwrap()
        .inserted_ids[0]
        .clone()
}

pub async fn seed_lecturer(
    state: &AppState,
    email: &str,
    fullname: &str,
    lecturer_type: &str,
    department: &str,
    password: &str,
) -> String {
    let now = Utc::now();
    let hash = hash_password(password).unwrap();
    state
        .store
        .insert_one(
            COLLECTION_LECTURERS,
            object(json!({
                "email": email,
                "fullname": fullname,
                "type": lecturer_type,
                "department": department,
                "title": "Dr.",
                "designation": "Senior Lecturer",
                "phone_number": "0000000000",
                "initial_password": "XX-testpass",
                "password": hash,
                "password_changed": false,
                "created_at": now,
                "updated_at": now,
            })),
        )
        .await
        .unwrap()
        .inserted_ids[0]
        .clone()
}

pub async fn seed_course(state: &AppState, code: &str, title: &str) -> String {
    let now = Utc::now();
    state
        .store
        .insert_one(
            COLLECTION_COURSES,
            object(json!({
                "course_code": code,
                "course_title": title,
                "semester": "FIRST",
                "is_allocated": false,
                "created_at": now,
                "updated_at": now,
            })),
        )
        .await
        .unwrap()
        .inserted_ids[0]
        .clone()
}

pub fn token_for(state: &AppState, uid: &str, email: &str, role: &str) -> String {
    create_access_token(uid, email, role, &state.jwt_config).unwrap()
}

/// Sends a request through the router and returns the status plus the
/// parsed JSON body.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}
