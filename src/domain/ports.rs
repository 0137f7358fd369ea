use crate::domain::model::{FinalizationOutcome, SuggestionResult, ValidInput};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Resolves a validated submission into an ordered candidate list.
/// One outbound call per invocation; no automatic retry.
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    async fn request_suggestions(&self, input: &ValidInput) -> Result<SuggestionResult>;
}

/// Commits a chosen set of service titles. One outbound call per
/// invocation; an empty set is an error, never a silent no-op.
#[async_trait]
pub trait FinalizeSink: Send + Sync {
    async fn finalize(&self, titles: &[String]) -> Result<FinalizationOutcome>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn suggestions_path(&self) -> &str;
    fn finalize_path(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}
