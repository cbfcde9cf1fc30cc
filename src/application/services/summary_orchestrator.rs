use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::Summarizer;
use crate::domain::{
    GenerationRequest, SummaryConfig, SummaryDiagnostics, SummaryFailure, SummaryOutcome,
    SummaryPlan, SummaryStage, SummaryStrategy, word_count,
};

use super::chunk_planner::ChunkPlanner;
use super::processing_context::ProcessingContext;

/// Texts shorter than this (after trimming) are not worth summarizing.
pub const MIN_SUMMARY_INPUT_CHARS: usize = 80;

/// Plans chunks, drives the summarization backend and records diagnostics.
/// Never fails: every failure becomes an empty summary plus a reason.
pub struct SummaryOrchestrator {
    summarizer: Option<Arc<dyn Summarizer>>,
    planner: ChunkPlanner,
    config: SummaryConfig,
}

struct Generated {
    summary: String,
    strategy: SummaryStrategy,
    stage: SummaryStage,
}

impl SummaryOrchestrator {
    pub fn new(summarizer: Option<Arc<dyn Summarizer>>, config: SummaryConfig) -> Self {
        Self {
            summarizer,
            planner: ChunkPlanner::from_config(&config),
            config,
        }
    }

    pub fn from_context(context: &ProcessingContext, config: SummaryConfig) -> Self {
        Self::new(context.summarizer(), config)
    }

    pub fn is_available(&self) -> bool {
        self.summarizer.is_some()
    }

    #[tracing::instrument(skip(self, text), fields(input_chars = text.len()))]
    pub async fn summarize(&self, text: &str) -> SummaryOutcome {
        let started = Instant::now();
        let mut diagnostics = SummaryDiagnostics {
            strategy: SummaryStrategy::None.to_string(),
            original_words: word_count(text),
            ..SummaryDiagnostics::default()
        };

        let result = self.run(text, &mut diagnostics).await;
        diagnostics.duration_seconds = started.elapsed().as_secs_f64();

        match result {
            Ok(generated) => {
                diagnostics.generated = true;
                diagnostics.strategy = generated.strategy.to_string();
                diagnostics.stage = generated.stage;
                diagnostics.summary_words = word_count(&generated.summary);
                tracing::info!(
                    chunks = diagnostics.chunks,
                    strategy = %diagnostics.strategy,
                    summary_words = diagnostics.summary_words,
                    duration_seconds = diagnostics.duration_seconds,
                    "Summary generated"
                );
                SummaryOutcome {
                    summary: generated.summary,
                    diagnostics,
                }
            }
            Err(failure) => {
                diagnostics.reason = failure.to_string();
                diagnostics.stage = failure.stage();
                tracing::warn!(reason = %diagnostics.reason, "Summary not generated");
                SummaryOutcome {
                    summary: String::new(),
                    diagnostics,
                }
            }
        }
    }

    async fn run(
        &self,
        text: &str,
        diagnostics: &mut SummaryDiagnostics,
    ) -> Result<Generated, SummaryFailure> {
        let summarizer = self
            .summarizer
            .as_ref()
            .ok_or(SummaryFailure::SummarizerUnavailable)?;

        if text.trim().chars().count() < MIN_SUMMARY_INPUT_CHARS {
            return Err(SummaryFailure::NotEnoughText);
        }

        let plan = self.planner.plan(text);
        record_plan(&plan, diagnostics);

        if plan.chunks.is_empty() {
            return Err(SummaryFailure::NoChunksAvailable);
        }

        let chunk_texts = plan.chunk_texts();
        let request = GenerationRequest::for_chunks(&self.config, chunk_texts.len());

        let records = summarizer
            .summarize_batch(&chunk_texts, &request)
            .await
            .map_err(|e| SummaryFailure::GenerationError(e.to_string()))?;

        let pieces: Vec<&str> = records.iter().filter_map(|r| r.non_empty_text()).collect();
        if pieces.is_empty() {
            return Err(SummaryFailure::EmptySummary);
        }
        let combined = pieces.join(" ");

        if chunk_texts.len() == 1 {
            return Ok(Generated {
                summary: combined,
                strategy: SummaryStrategy::SingleChunk,
                stage: SummaryStage::Summarized,
            });
        }

        if !self.config.allow_refine {
            return Ok(Generated {
                summary: combined,
                strategy: SummaryStrategy::MultiChunk,
                stage: SummaryStage::Summarized,
            });
        }

        Ok(match self.refine(summarizer.as_ref(), &combined, &request).await {
            Some(refined) => Generated {
                summary: refined,
                strategy: SummaryStrategy::MultiChunkRefined,
                stage: SummaryStage::Refined,
            },
            None => Generated {
                summary: combined,
                strategy: SummaryStrategy::MultiChunk,
                stage: SummaryStage::Summarized,
            },
        })
    }

    /// Second pass over the combined summary. Any failure keeps the combined
    /// text and is only logged.
    async fn refine(
        &self,
        summarizer: &dyn Summarizer,
        combined: &str,
        request: &GenerationRequest,
    ) -> Option<String> {
        let refined_request = request.refined();
        match summarizer
            .summarize_batch(&[combined.to_string()], &refined_request)
            .await
        {
            Ok(records) => {
                let refined = records
                    .iter()
                    .find_map(|r| r.non_empty_text())
                    .map(str::to_string);
                if refined.is_none() {
                    tracing::debug!("Refinement returned no text; keeping combined summary");
                }
                refined
            }
            Err(e) => {
                tracing::debug!(error = %e, "Refinement failed; keeping combined summary");
                None
            }
        }
    }
}

fn record_plan(plan: &SummaryPlan, diagnostics: &mut SummaryDiagnostics) {
    diagnostics.original_words = plan.original_words;
    diagnostics.trimmed = plan.trimmed();
    diagnostics.trimmed_words = plan.trimmed_words;
    diagnostics.chunks = plan.chunks.len();
    diagnostics.stage = SummaryStage::Chunked;
}
