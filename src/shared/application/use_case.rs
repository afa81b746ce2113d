use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Read-side use case.
///
/// The handler owns its ports; `TQuery` carries the already-validated
/// request and `TResult` is what the transport layer serializes.
#[async_trait]
pub trait Query<TQuery, TResult> {
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
