mod chunk_planner;
mod content_analyzer;
mod correction_engine;
mod document_processor;
mod processing_context;
mod sentence_splitter;
mod simple_corrector;
mod summary_orchestrator;
mod text_cleaner;

pub use chunk_planner::ChunkPlanner;
pub use content_analyzer::ContentAnalyzer;
pub use correction_engine::{CorrectionConfig, CorrectionEngine, DEFAULT_MAX_EDIT_DISTANCE};
pub use document_processor::{DocumentProcessingError, DocumentProcessor, ProcessedDocument};
pub use processing_context::{ProcessingContext, ProcessingContextBuilder};
pub use sentence_splitter::split_sentences;
pub use simple_corrector::simple_correct;
pub use summary_orchestrator::{MIN_SUMMARY_INPUT_CHARS, SummaryOrchestrator};
pub use text_cleaner::TextCleaner;
