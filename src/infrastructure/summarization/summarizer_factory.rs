use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::Summarizer;
use crate::presentation::config::{SummarizationSettings, SummarizerBackend};

use super::{HttpSummarizer, MockSummarizer};

pub struct SummarizerFactory;

#[derive(Debug, thiserror::Error)]
pub enum SummarizerFactoryError {
    #[error("endpoint is required for the http summarization backend")]
    MissingEndpoint,
    #[error("summarizer initialization failed: {0}")]
    InitializationFailed(String),
}

impl SummarizerFactory {
    /// `Ok(None)` means summarization is switched off; callers report
    /// `summarizer_unavailable` instead of failing.
    pub fn create(
        settings: &SummarizationSettings,
    ) -> Result<Option<Arc<dyn Summarizer>>, SummarizerFactoryError> {
        if !settings.enabled {
            tracing::info!("Summarization disabled");
            return Ok(None);
        }

        match settings.backend {
            SummarizerBackend::None => Ok(None),
            SummarizerBackend::Mock => {
                tracing::info!("Using mock summarizer");
                Ok(Some(Arc::new(MockSummarizer::new())))
            }
            SummarizerBackend::Http => {
                let endpoint = settings
                    .endpoint
                    .as_deref()
                    .filter(|e| !e.is_empty())
                    .ok_or(SummarizerFactoryError::MissingEndpoint)?;
                tracing::info!(endpoint, "Using HTTP summarizer");
                let summarizer = HttpSummarizer::new(
                    endpoint,
                    settings.api_key.clone(),
                    Duration::from_secs(settings.request_timeout_secs),
                )
                .map_err(|e| SummarizerFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Some(Arc::new(summarizer)))
            }
        }
    }

    /// Like [`create`](Self::create), but a misconfigured backend only
    /// disables summarization instead of failing startup.
    pub fn create_or_disabled(settings: &SummarizationSettings) -> Option<Arc<dyn Summarizer>> {
        match Self::create(settings) {
            Ok(summarizer) => summarizer,
            Err(e) => {
                tracing::warn!(error = %e, "Summarizer unavailable; summaries will be skipped");
                None
            }
        }
    }
}
