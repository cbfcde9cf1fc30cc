use std::sync::Arc;

use crate::application::services::{
    ContentAnalyzer, CorrectionEngine, DocumentProcessor, SummaryOrchestrator,
};
use crate::domain::Capabilities;

#[derive(Clone)]
pub struct AppState {
    pub correction_engine: Arc<CorrectionEngine>,
    pub summary_orchestrator: Arc<SummaryOrchestrator>,
    pub content_analyzer: Arc<ContentAnalyzer>,
    pub document_processor: Arc<DocumentProcessor>,
}

impl AppState {
    pub fn capabilities(&self) -> Capabilities {
        self.correction_engine.context().capabilities()
    }
}
