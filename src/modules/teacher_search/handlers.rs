use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum::Json;

use super::application::{SearchTeachersRequest, SearchTeachersResult};
use crate::modules::access::AccessGuard;
use crate::routes::AppState;
use crate::shared::application::{use_case::Query as _, ApiResponse};
use crate::shared::errors::{AppError, AppResult, ErrorKind};
use crate::{log_debug, log_error};

/// `GET /api/homework/teachers/search`
///
/// Access guard → query normalizer → search use case → envelope.
pub async fn search_teachers(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<SearchTeachersRequest>, QueryRejection>,
) -> AppResult<Json<ApiResponse<SearchTeachersResult>>> {
    run_search(&state, &headers, params).await.map_err(|e| {
        match e.kind() {
            ErrorKind::Internal => log_error!("An error occurred while listing teachers: {}", e),
            _ => log_debug!("Teacher search rejected: {}", e),
        }
        e
    })
}

async fn run_search(
    state: &AppState,
    headers: &HeaderMap,
    params: Result<Query<SearchTeachersRequest>, QueryRejection>,
) -> AppResult<Json<ApiResponse<SearchTeachersResult>>> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let caller = state
        .access_guard
        .authorize_homework_student(AccessGuard::extract_token(header))
        .await?;

    let Query(request) =
        params.map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;
    let query = request.into_query(&state.pagination)?;

    log_debug!("User {} searching teachers", caller.user_id);
    let result = state.search_teachers.execute(query).await?;

    Ok(Json(ApiResponse::ok(result)))
}
