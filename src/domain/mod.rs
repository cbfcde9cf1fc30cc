mod capabilities;
mod chunk;
mod content_analysis;
mod correction;
mod document;
mod edit_distance;
mod summary;
mod token;
mod vocabulary;

pub use capabilities::Capabilities;
pub use chunk::Chunk;
pub use content_analysis::{ContentAnalysis, Difficulty};
pub use correction::{CorrectionCandidate, CorrectionResult, word_count};
pub use document::{BlockKind, ContentType, ExtractionBlock, ExtractionReport, ProcessingMethod};
pub use edit_distance::edit_distance;
pub use summary::{
    GenerationRequest, SummaryConfig, SummaryDiagnostics, SummaryFailure, SummaryOutcome,
    SummaryPlan, SummaryRecord, SummaryStage, SummaryStrategy,
};
pub use token::{PosClass, Token};
pub use vocabulary::Vocabulary;
