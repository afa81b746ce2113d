use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::modules::access::domain::{Caller, SessionRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_warn};

static AUTHORIZATION_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:token|bearer)\s+([A-Za-z0-9._~+/=-]+)\s*$")
        .expect("authorization header pattern is valid")
});

/// Rejects callers who may not browse the teacher roster.
/// Runs before any search work is done.
pub struct AccessGuard {
    session_repository: Arc<dyn SessionRepository>,
}

impl AccessGuard {
    pub fn new(session_repository: Arc<dyn SessionRepository>) -> Self {
        Self { session_repository }
    }

    /// Pull the token out of an `Authorization: Token <key>` (or `Bearer`) header
    pub fn extract_token(header: Option<&str>) -> Option<&str> {
        let captures = AUTHORIZATION_SCHEME.captures(header?)?;
        captures.get(1).map(|m| m.as_str())
    }

    pub async fn authorize_homework_student(&self, token: Option<&str>) -> AppResult<Caller> {
        let token = token.ok_or_else(|| {
            log_debug!("Rejected request without access token");
            AppError::Unauthorized("Access token is invalid".to_string())
        })?;

        let caller = self
            .session_repository
            .find_caller_by_token(token)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Access token is invalid".to_string()))?;

        if !caller.is_active {
            return Err(AppError::Unauthorized("User is not logged in".to_string()));
        }

        if !caller.is_homework_student() {
            log_warn!(
                "User {} with role {:?} tried to search teachers",
                caller.user_id,
                caller.role
            );
            return Err(AppError::Unauthorized(
                "User is not a homework student".to_string(),
            ));
        }

        Ok(caller)
    }
}
