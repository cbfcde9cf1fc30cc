use std::fmt;

use serde::Serialize;

use super::chunk::Chunk;

pub const REFINE_MAX_LENGTH_MARGIN: usize = 40;
pub const REFINE_MIN_LENGTH_MARGIN: usize = 20;
pub const REFINE_LENGTH_CEILING: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    pub max_words_per_chunk: usize,
    pub max_chunks: usize,
    pub trim_word_budget: Option<usize>,
    pub batch_size: usize,
    pub min_summary_length: usize,
    pub max_summary_length: usize,
    pub allow_refine: bool,
    pub num_beams: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_words_per_chunk: 400,
            max_chunks: 8,
            trim_word_budget: None,
            batch_size: 4,
            min_summary_length: 40,
            max_summary_length: 160,
            allow_refine: true,
            num_beams: 4,
        }
    }
}

/// Generation parameters handed to the summarization backend. Decoding is
/// always deterministic beam search with early stopping; over-length input is
/// truncated by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub min_length: usize,
    pub max_length: usize,
    pub batch_size: usize,
    pub num_beams: usize,
    pub do_sample: bool,
    pub truncation: bool,
    pub early_stopping: bool,
}

impl GenerationRequest {
    pub fn for_chunks(config: &SummaryConfig, chunk_count: usize) -> Self {
        let batch_size = if chunk_count > 1 {
            config.batch_size.max(1)
        } else {
            1
        };
        Self {
            min_length: config.min_summary_length.min(config.max_summary_length),
            max_length: config.max_summary_length,
            batch_size,
            num_beams: config.num_beams.max(1),
            do_sample: false,
            truncation: true,
            early_stopping: true,
        }
    }

    /// Slightly longer budget for the second pass over a combined summary.
    pub fn refined(&self) -> Self {
        let max_length = (self.max_length + REFINE_MAX_LENGTH_MARGIN).min(REFINE_LENGTH_CEILING);
        let min_length = (self.min_length + REFINE_MIN_LENGTH_MARGIN)
            .min(REFINE_LENGTH_CEILING)
            .min(max_length);
        Self {
            min_length,
            max_length,
            batch_size: 1,
            ..self.clone()
        }
    }
}

/// One result record from the backend; `summary_text` may be missing or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryRecord {
    pub summary_text: Option<String>,
}

impl SummaryRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            summary_text: Some(text.into()),
        }
    }

    pub fn non_empty_text(&self) -> Option<&str> {
        self.summary_text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Word accounting and chunk list for one summarization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPlan {
    pub original_words: usize,
    pub trim_threshold: Option<usize>,
    pub trimmed_words: usize,
    pub chunks: Vec<Chunk>,
}

impl SummaryPlan {
    pub fn trimmed(&self) -> bool {
        self.trimmed_words > 0
    }

    pub fn chunk_texts(&self) -> Vec<String> {
        self.chunks.iter().map(Chunk::text).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStage {
    #[default]
    NotRun,
    Skipped,
    Chunked,
    Summarized,
    Refined,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStrategy {
    #[default]
    None,
    SingleChunk,
    MultiChunk,
    MultiChunkRefined,
}

impl SummaryStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SingleChunk => "single_chunk",
            Self::MultiChunk => "multi_chunk",
            Self::MultiChunkRefined => "multi_chunk_refined",
        }
    }
}

impl fmt::Display for SummaryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryFailure {
    #[error("summarizer_unavailable")]
    SummarizerUnavailable,
    #[error("not_enough_text")]
    NotEnoughText,
    #[error("no_chunks_available")]
    NoChunksAvailable,
    #[error("generation_error:{0}")]
    GenerationError(String),
    #[error("empty_summary")]
    EmptySummary,
}

impl SummaryFailure {
    /// Failures that happen before any chunking count as skips.
    pub fn stage(&self) -> SummaryStage {
        match self {
            Self::SummarizerUnavailable | Self::NotEnoughText => SummaryStage::Skipped,
            _ => SummaryStage::Failed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDiagnostics {
    pub generated: bool,
    pub strategy: String,
    pub reason: String,
    pub chunks: usize,
    pub trimmed: bool,
    pub trimmed_words: usize,
    pub duration_seconds: f64,
    pub original_words: usize,
    pub summary_words: usize,
    pub stage: SummaryStage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryOutcome {
    pub summary: String,
    pub diagnostics: SummaryDiagnostics,
}

impl SummaryOutcome {
    pub fn is_generated(&self) -> bool {
        self.diagnostics.generated
    }
}
