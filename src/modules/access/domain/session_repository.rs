use async_trait::async_trait;

use super::caller::Caller;
use crate::shared::errors::AppResult;

/// Port for resolving access tokens
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_caller_by_token(&self, token: &str) -> AppResult<Option<Caller>>;
}
