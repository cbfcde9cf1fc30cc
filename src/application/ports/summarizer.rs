use async_trait::async_trait;

use crate::domain::{GenerationRequest, SummaryRecord};

/// Fixed-capacity summarization backend. Returns one record per input chunk;
/// batching up to `request.batch_size` is the backend's concern.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize_batch(
        &self,
        chunks: &[String],
        request: &GenerationRequest,
    ) -> Result<Vec<SummaryRecord>, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
}
