use async_trait::async_trait;

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::{GenerationRequest, SummaryRecord};

/// Deterministic stand-in for a model: keeps the leading `max_length` words
/// of each chunk.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockSummarizer;

impl MockSummarizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize_batch(
        &self,
        chunks: &[String],
        request: &GenerationRequest,
    ) -> Result<Vec<SummaryRecord>, SummarizerError> {
        Ok(chunks
            .iter()
            .map(|chunk| {
                let words: Vec<&str> = chunk.split_whitespace().take(request.max_length).collect();
                SummaryRecord::new(words.join(" "))
            })
            .collect())
    }
}
