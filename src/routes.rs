use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::modules::access::AccessGuard;
use crate::modules::teacher_search::{handlers, SearchTeachersHandler};
use crate::shared::application::ApiResponse;
use crate::shared::infrastructure::database::PoolStatus;
use crate::shared::{PaginationConfig, SharedDatabaseState};

pub const SEARCH_TEACHERS_PATH: &str = "/api/homework/teachers/search";
pub const HEALTH_PATH: &str = "/health";

/// Services shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub access_guard: Arc<AccessGuard>,
    pub search_teachers: Arc<SearchTeachersHandler>,
    pub pagination: PaginationConfig,
    pub db_state: SharedDatabaseState,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub database: String,
    pub pool: Option<PoolStatus>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(SEARCH_TEACHERS_PATH, get(handlers::search_teachers))
        .route(HEALTH_PATH, get(health))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthReport>> {
    let db_state = state.db_state.read().await;
    let pool = db_state.get_database().ok().map(|db| db.pool_status());

    Json(ApiResponse::ok(HealthReport {
        database: db_state.status_message(),
        pool,
    }))
}
