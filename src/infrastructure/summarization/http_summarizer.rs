use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::{GenerationRequest, SummaryRecord};

/// Client for an inference endpoint serving a summarization model.
pub struct HttpSummarizer {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a [String],
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    min_length: usize,
    max_length: usize,
    num_beams: usize,
    do_sample: bool,
    truncation: bool,
    early_stopping: bool,
}

#[derive(Deserialize)]
struct InferenceRecord {
    #[serde(default)]
    summary_text: Option<String>,
}

impl From<&GenerationRequest> for InferenceParameters {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            min_length: request.min_length,
            max_length: request.max_length,
            num_beams: request.num_beams,
            do_sample: request.do_sample,
            truncation: request.truncation,
            early_stopping: request.early_stopping,
        }
    }
}

impl HttpSummarizer {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SummarizerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SummarizerError::RequestFailed(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    async fn summarize_one_batch(
        &self,
        inputs: &[String],
        request: &GenerationRequest,
    ) -> Result<Vec<SummaryRecord>, SummarizerError> {
        let body = InferenceRequest {
            inputs,
            parameters: request.into(),
        };

        let mut builder = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {key}"));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SummarizerError::RequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SummarizerError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizerError::InferenceFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let records: Vec<InferenceRecord> = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(e.to_string()))?;

        if records.len() != inputs.len() {
            return Err(SummarizerError::InvalidResponse(format!(
                "expected {} records, got {}",
                inputs.len(),
                records.len()
            )));
        }

        Ok(records
            .into_iter()
            .map(|r| SummaryRecord {
                summary_text: r.summary_text,
            })
            .collect())
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    #[tracing::instrument(skip(self, chunks, request), fields(chunks = chunks.len(), batch_size = request.batch_size))]
    async fn summarize_batch(
        &self,
        chunks: &[String],
        request: &GenerationRequest,
    ) -> Result<Vec<SummaryRecord>, SummarizerError> {
        let mut records = Vec::with_capacity(chunks.len());
        for batch in chunks.chunks(request.batch_size.max(1)) {
            records.extend(self.summarize_one_batch(batch, request).await?);
        }
        tracing::debug!(records = records.len(), "Summarization batches complete");
        Ok(records)
    }
}
