/// Router builders and request helpers
use super::in_memory::{InMemorySessionRepository, InMemoryTeacherRepository};
use axum::body::Body;
use axum::http::{header::AUTHORIZATION, Request, StatusCode};
use axum::Router;
use homework_teachers_lib::modules::access::AccessGuard;
use homework_teachers_lib::modules::teacher_search::SearchTeachersHandler;
use homework_teachers_lib::routes::{build_router, AppState};
use homework_teachers_lib::shared::{DatabaseState, PaginationConfig};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

pub const STUDENT_TOKEN: &str = "student-token";

pub fn build_test_router(
    teachers: InMemoryTeacherRepository,
    sessions: InMemorySessionRepository,
) -> Router {
    let state = AppState {
        access_guard: Arc::new(AccessGuard::new(Arc::new(sessions))),
        search_teachers: Arc::new(SearchTeachersHandler::new(Arc::new(teachers))),
        pagination: PaginationConfig::default(),
        db_state: Arc::new(RwLock::new(DatabaseState::Connecting)),
    };
    build_router(state)
}

/// Issue a GET and decode the JSON envelope
pub async fn get_json(router: Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(token) = token {
        request = request.header(AUTHORIZATION, format!("Token {}", token));
    }

    let response = router
        .oneshot(request.body(Body::empty()).expect("request builds"))
        .await
        .expect("router responds");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let json = serde_json::from_slice(&bytes).expect("body is JSON");

    (status, json)
}

/// Teacher ids of a paginated listing, in order
pub fn listed_ids(body: &Value) -> Vec<String> {
    body["data"]["items"]
        .as_array()
        .expect("paginated items")
        .iter()
        .map(|t| t["id"].as_str().expect("id").to_string())
        .collect()
}
