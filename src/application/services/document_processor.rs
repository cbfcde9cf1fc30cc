use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::application::ports::{OcrEngine, OcrEngineError, PageSource, PageSourceError};
use crate::domain::{
    ContentAnalysis, ContentType, ExtractionBlock, ExtractionReport, ProcessingMethod,
    SummaryOutcome, word_count,
};

use super::content_analyzer::ContentAnalyzer;
use super::correction_engine::CorrectionEngine;
use super::summary_orchestrator::SummaryOrchestrator;
use super::text_cleaner::TextCleaner;

const BLOCK_SEPARATOR: &str = "\n\n";

/// Extraction report enriched with analysis and a summary of the extracted text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedDocument {
    #[serde(flatten)]
    pub report: ExtractionReport,
    pub analysis: ContentAnalysis,
    pub summary: SummaryOutcome,
}

/// Hybrid extraction: native PDF text is cleaned, embedded images and
/// standalone images go through OCR and correction.
pub struct DocumentProcessor {
    page_source: Arc<dyn PageSource>,
    ocr_engine: Arc<dyn OcrEngine>,
    correction_engine: Arc<CorrectionEngine>,
    summary_orchestrator: Arc<SummaryOrchestrator>,
    cleaner: TextCleaner,
    analyzer: ContentAnalyzer,
}

/// Running totals while blocks are collected.
#[derive(Default)]
struct BlockAccumulator {
    native_blocks: Vec<ExtractionBlock>,
    ocr_blocks: Vec<ExtractionBlock>,
    signed_word_delta: i64,
}

impl BlockAccumulator {
    fn push_ocr(&mut self, page: u32, image: u32, raw: String, corrected: String) {
        self.signed_word_delta += word_count(&raw) as i64 - word_count(&corrected) as i64;
        self.ocr_blocks
            .push(ExtractionBlock::ocr(page, image, raw, corrected));
    }

    fn into_report(self, method: ProcessingMethod, started: Instant) -> ExtractionReport {
        let raw_text = join_blocks(self.ocr_blocks.iter().filter_map(|b| b.raw_content.as_deref()));
        let corrected_text = join_blocks(self.ocr_blocks.iter().map(|b| b.content.as_str()));

        let blocks: Vec<ExtractionBlock> =
            self.native_blocks.into_iter().chain(self.ocr_blocks).collect();
        let extracted_text = join_blocks(blocks.iter().map(|b| b.content.as_str()));
        let pages_processed = blocks.iter().map(|b| b.page).collect::<BTreeSet<_>>().len();
        let images_processed = blocks.iter().filter(|b| b.image.is_some()).count();

        ExtractionReport {
            processing_method: method,
            extracted_text,
            raw_text,
            corrected_text,
            pages_processed,
            images_processed,
            processing_time_seconds: round_seconds(started.elapsed().as_secs_f64()),
            corrections_applied: self.signed_word_delta.unsigned_abs() as usize,
            blocks,
        }
    }
}

impl DocumentProcessor {
    pub fn new(
        page_source: Arc<dyn PageSource>,
        ocr_engine: Arc<dyn OcrEngine>,
        correction_engine: Arc<CorrectionEngine>,
        summary_orchestrator: Arc<SummaryOrchestrator>,
    ) -> Self {
        let context = Arc::clone(correction_engine.context());
        Self {
            page_source,
            ocr_engine,
            correction_engine,
            summary_orchestrator,
            cleaner: TextCleaner::new(Arc::clone(&context)),
            analyzer: ContentAnalyzer::new(context),
        }
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len(), content_type = ?content_type))]
    pub async fn process(
        &self,
        data: &[u8],
        content_type: ContentType,
    ) -> Result<ExtractionReport, DocumentProcessingError> {
        let report = match content_type {
            ContentType::Pdf => self.process_pdf(data).await?,
            ContentType::Image => self.process_image(data).await?,
        };

        tracing::info!(
            pages_processed = report.pages_processed,
            images_processed = report.images_processed,
            corrections_applied = report.corrections_applied,
            processing_time_seconds = report.processing_time_seconds,
            "Document processed"
        );
        Ok(report)
    }

    pub async fn process_with_summary(
        &self,
        data: &[u8],
        content_type: ContentType,
    ) -> Result<ProcessedDocument, DocumentProcessingError> {
        let report = self.process(data, content_type).await?;
        let analysis = self.analyzer.analyze(&report.extracted_text);
        let summary = self
            .summary_orchestrator
            .summarize(&report.extracted_text)
            .await;

        Ok(ProcessedDocument {
            report,
            analysis,
            summary,
        })
    }

    async fn process_pdf(&self, data: &[u8]) -> Result<ExtractionReport, DocumentProcessingError> {
        let started = Instant::now();
        let pages = self.page_source.extract_pages(data).await?;
        let mut acc = BlockAccumulator::default();

        for page in &pages {
            if !page.text.trim().is_empty() {
                let cleaned = self.cleaner.clean_native_text(&page.text);
                acc.native_blocks
                    .push(ExtractionBlock::native(page.page_number, cleaned));
            }
        }

        let mut recognized: Vec<(u32, u32, String)> = Vec::new();
        for page in &pages {
            for (index, image) in page.images.iter().enumerate() {
                let image_number = index as u32 + 1;
                let raw = match self.ocr_engine.run_ocr(image).await {
                    Ok(text) => text.trim().to_string(),
                    Err(e) => {
                        tracing::warn!(
                            page = page.page_number,
                            image = image_number,
                            error = %e,
                            "Skipping image that failed OCR"
                        );
                        continue;
                    }
                };
                if !raw.is_empty() {
                    recognized.push((page.page_number, image_number, raw));
                }
            }
        }

        let raws: Vec<String> = recognized.iter().map(|(_, _, raw)| raw.clone()).collect();
        let corrected = self.correct_batch(raws).await?;
        for ((page, image, raw), corrected) in recognized.into_iter().zip(corrected) {
            acc.push_ocr(page, image, raw, corrected);
        }

        Ok(acc.into_report(ProcessingMethod::HybridPdf, started))
    }

    async fn process_image(&self, data: &[u8]) -> Result<ExtractionReport, DocumentProcessingError> {
        let started = Instant::now();
        let raw = self.ocr_engine.run_ocr(data).await?.trim().to_string();
        let mut acc = BlockAccumulator::default();

        if !raw.is_empty() {
            let corrected = self.correct_batch(vec![raw.clone()]).await?;
            if let Some(corrected) = corrected.into_iter().next() {
                acc.push_ocr(1, 1, raw, corrected);
            }
        }

        let mut report = acc.into_report(ProcessingMethod::ImageOcr, started);
        report.pages_processed = 1;
        report.images_processed = 1;
        Ok(report)
    }

    /// Corrects every OCR text of one document inside a single blocking task.
    async fn correct_batch(&self, raws: Vec<String>) -> Result<Vec<String>, DocumentProcessingError> {
        if raws.is_empty() {
            return Ok(Vec::new());
        }

        let engine = Arc::clone(&self.correction_engine);
        let corrected = tokio::task::spawn_blocking(move || {
            raws.iter()
                .map(|raw| engine.correct(raw).text)
                .collect::<Vec<_>>()
        })
        .await?;
        Ok(corrected)
    }
}

fn join_blocks<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(BLOCK_SEPARATOR)
}

fn round_seconds(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentProcessingError {
    #[error("page extraction: {0}")]
    PageExtraction(#[from] PageSourceError),
    #[error("ocr: {0}")]
    Ocr(#[from] OcrEngineError),
    #[error("correction task failed: {0}")]
    Correction(#[from] tokio::task::JoinError),
}
