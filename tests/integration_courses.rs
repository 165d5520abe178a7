mod common;

use axum::http::StatusCode;
use coursealloc::state::AppState;
use serde_json::json;

use common::{seed_admin, seed_course, seed_lecturer, send, test_app, test_state, token_for};

async fn hod_token(state: &AppState) -> String {
    let id = seed_lecturer(
        state,
        "hod@example.com",
        "Grace Hopper",
        "HOD",
        "Computer Science",
        "pass1234",
    )
    .await;
    token_for(state, &id, "hod@example.com", "HOD")
}

#[tokio::test]
async fn plain_lecturer_cannot_reach_hod_routes() {
    let state = test_state();
    let id = seed_lecturer(
        &state,
        "at@example.com",
        "Alan Turing",
        "LECTURER",
        "Computer Science",
        "pass1234",
    )
    .await;
    let token = token_for(&state, &id, "at@example.com", "LECTURER");
    let app = test_app(&state);

    let (status, body) = send(app, "GET", "/hod/courses", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("lecturer not authorized"));
}

#[tokio::test]
async fn admin_is_not_a_lecturer_on_hod_routes() {
    let state = test_state();
    let id = seed_admin(&state, "admin@example.com", "secret123").await;
    let token = token_for(&state, &id, "admin@example.com", "admin");
    let app = test_app(&state);

    let (status, body) = send(app, "GET", "/hod/courses", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("user not a lecturer"));
}

#[tokio::test]
async fn register_courses_batch_succeeds() {
    let state = test_state();
    let token = hod_token(&state).await;
    let app = test_app(&state);

    let (status, body) = send(
        app,
        "POST",
        "/hod/courses",
        Some(&token),
        Some(json!({"courses": [
            {"course_code": "CSC101", "course_title": "Intro to CS", "semester": "FIRST"},
            {"course_code": "CSC202", "course_title": "Data Structures", "semester": "SECOND"},
        ]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let courses = body["data"].as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert!(courses[0]["id"].is_string());
    assert_eq!(courses[0]["is_allocated"], json!(false));
    assert_eq!(courses[1]["semester"], json!("SECOND"));
}

#[tokio::test]
async fn register_courses_rejects_existing_code_and_bad_semester() {
    let state = test_state();
    let token = hod_token(&state).await;
    seed_course(&state, "CSC101", "Intro to CS").await;
    let app = test_app(&state);

    let (status, body) = send(
        app.clone(),
        "POST",
        "/hod/courses",
        Some(&token),
        Some(json!({"courses": [
            {"course_code": "CSC101", "course_title": "Other Title", "semester": "FIRST"},
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Course code already exists"));

    let (status, body) = send(
        app,
        "POST",
        "/hod/courses",
        Some(&token),
        Some(json!({"courses": [
            {"course_code": "CSC303", "course_title": "Compilers", "semester": "THIRD"},
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Invalid course semester"));
}

#[tokio::test]
async fn update_course_strips_protected_fields() {
    let state = test_state();
    let token = hod_token(&state).await;
    let id = seed_course(&state, "CSC101", "Intro to CS").await;
    let app = test_app(&state);

    let (status, body) = send(
        app,
        "PUT",
        &format!("/hod/courses/{id}"),
        Some(&token),
        Some(json!({"course_code": "CSC102", "is_allocated": true, "id": "forged"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["course_code"], json!("CSC102"));
    assert_eq!(body["data"]["id"], json!(id));
    assert_eq!(body["data"]["is_allocated"], json!(false));
}

#[tokio::test]
async fn update_with_only_protected_fields_is_an_invalid_body() {
    let state = test_state();
    let token = hod_token(&state).await;
    let id = seed_course(&state, "CSC101", "Intro to CS").await;
    let app = test_app(&state);

    let (status, body) = send(
        app,
        "PUT",
        &format!("/hod/courses/{id}"),
        Some(&token),
        Some(json!({"is_allocated": true, "created_at": "2020-01-01T00:00:00Z"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Invalid body param!"));
}

#[tokio::test]
async fn update_uniqueness_excludes_the_course_itself() {
    let state = test_state();
    let token = hod_token(&state).await;
    let id = seed_course(&state, "CSC101", "Intro to CS").await;
    seed_course(&state, "CSC202", "Data Structures").await;
    let app = test_app(&state);

    // Re-submitting the course's own code is not a conflict.
    let (status, _) = send(
        app.clone(),
        "PUT",
        &format!("/hod/courses/{id}"),
        Some(&token),
        Some(json!({"course_code": "CSC101"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Another course's code still is.
    let (status, body) = send(
        app,
        "PUT",
        &format!("/hod/courses/{id}"),
        Some(&token),
        Some(json!({"course_code": "CSC202"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Course code already exists"));
}

#[tokio::test]
async fn delete_course_then_delete_again() {
    let state = test_state();
    let token = hod_token(&state).await;
    let id = seed_course(&state, "CSC101", "Intro to CS").await;
    let app = test_app(&state);

    let (status, _) = send(
        app.clone(),
        "DELETE",
        &format!("/hod/courses/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app,
        "DELETE",
        &format!("/hod/courses/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("course not found"));
}

#[tokio::test]
async fn allocation_enriches_the_returned_course() {
    let state = test_state();
    let token = hod_token(&state).await;
    let course = seed_course(&state, "CSC101", "Intro to CS").await;
    let head = seed_lecturer(
        &state,
        "ada@example.com",
        "Ada Lovelace",
        "LECTURER",
        "Computer Science",
        "pass1234",
    )
    .await;
    let assistant = seed_lecturer(
        &state,
        "at@example.com",
        "Alan Turing",
        "LECTURER",
        "Computer Science",
        "pass1234",
    )
    .await;
    let app = test_app(&state);

    let (status, body) = send(
        app,
        "POST",
        "/hod/courses/allocate",
        Some(&token),
        Some(json!({
            "course_id": course,
            "head_lecturer": head,
            "assistant_lecturer": assistant,
            "session": "2023/2024",
            "level": "100",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_allocated"], json!(true));
    assert_eq!(body["data"]["session"], json!("2023/2024"));
    assert_eq!(
        body["data"]["head_lecturer"],
        json!({"id": head, "name": "Ada Lovelace"})
    );
    assert_eq!(
        body["data"]["assistant_lecturer"],
        json!({"id": assistant, "name": "Alan Turing"})
    );
    // The raw sub-object never leaves the API.
    assert!(body["data"].get("allocation").is_none());
}

#[tokio::test]
async fn allocation_rejects_one_lecturer_in_both_seats() {
    let state = test_state();
    let token = hod_token(&state).await;
    let course = seed_course(&state, "CSC101", "Intro to CS").await;
    let head = seed_lecturer(
        &state,
        "ada@example.com",
        "Ada Lovelace",
        "LECTURER",
        "Computer Science",
        "pass1234",
    )
    .await;
    let app = test_app(&state);

    let (status, body) = send(
        app,
        "POST",
        "/hod/courses/allocate",
        Some(&token),
        Some(json!({
            "course_id": course,
            "head_lecturer": head,
            "assistant_lecturer": head,
            "session": "2023/2024",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!("one lecturer cannot head and assist a course")
    );
}

#[tokio::test]
async fn allocation_rejects_unknown_course_and_lecturers() {
    let state = test_state();
    let token = hod_token(&state).await;
    let course = seed_course(&state, "CSC101", "Intro to CS").await;
    let head = seed_lecturer(
        &state,
        "ada@example.com",
        "Ada Lovelace",
        "LECTURER",
        "Computer Science",
        "pass1234",
    )
    .await;
    let app = test_app(&state);

    let (status, body) = send(
        app.clone(),
        "POST",
        "/hod/courses/allocate",
        Some(&token),
        Some(json!({
            "course_id": "missing",
            "head_lecturer": head,
            "assistant_lecturer": "other",
            "session": "2023/2024",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("course not found"));

    let (status, body) = send(
        app,
        "POST",
        "/hod/courses/allocate",
        Some(&token),
        Some(json!({
            "course_id": course,
            "head_lecturer": head,
            "assistant_lecturer": "missing",
            "session": "2023/2024",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("assistant lecturer not found"));
}

#[tokio::test]
async fn reallocation_replaces_the_previous_assignment() {
    let state = test_state();
    let token = hod_token(&state).await;
    let course = seed_course(&state, "CSC101", "Intro to CS").await;
    let first = seed_lecturer(
        &state,
        "ada@example.com",
        "Ada Lovelace",
        "LECTURER",
        "Computer Science",
        "pass1234",
    )
    .await;
    let second = seed_lecturer(
        &state,
        "at@example.com",
        "Alan Turing",
        "LECTURER",
        "Computer Science",
        "pass1234",
    )
    .await;
    let third = seed_lecturer(
        &state,
        "gh2@example.com",
        "Margaret Hamilton",
        "LECTURER",
        "Computer Science",
        "pass1234",
    )
    .await;
    let app = test_app(&state);

    let allocate = |head: String, assistant: String| {
        json!({
            "course_id": course,
            "head_lecturer": head,
            "assistant_lecturer": assistant,
            "session": "2023/2024",
        })
    };

    let (status, _) = send(
        app.clone(),
        "POST",
        "/hod/courses/allocate",
        Some(&token),
        Some(allocate(first.clone(), second.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app,
        "POST",
        "/hod/courses/allocate",
        Some(&token),
        Some(allocate(third.clone(), second)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["head_lecturer"],
        json!({"id": third, "name": "Margaret Hamilton"})
    );
}

#[tokio::test]
async fn hod_lecturer_listing_redacts_both_credentials() {
    let state = test_state();
    let token = hod_token(&state).await;
    let app = test_app(&state);

    let (status, body) = send(app, "GET", "/hod/lecturers", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let lecturers = body["data"].as_array().unwrap();
    assert_eq!(lecturers.len(), 1);
    assert!(lecturers[0].get("password").is_none());
    assert!(lecturers[0].get("initial_password").is_none());
}
