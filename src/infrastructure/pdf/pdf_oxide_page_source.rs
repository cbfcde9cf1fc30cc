use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{PageContent, PageSource, PageSourceError};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(60);

/// Native page text and embedded images through `pdf_oxide`. Images are
/// re-encoded as PNG so any OCR engine can read them.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfOxidePageSource;

impl PdfOxidePageSource {
    pub fn new() -> Self {
        Self
    }

    fn extract_from_file(path: &Path) -> Result<Vec<PageContent>, PageSourceError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| PageSourceError::ParseFailed(e.to_string()))?;

        let page_count = doc.page_count().map_err(|e| {
            PageSourceError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let image_dir = tempfile::tempdir().map_err(|e| {
            PageSourceError::ExtractionFailed(format!("failed to create temp directory: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            let page_number = (page_index + 1) as u32;
            let text = match doc.extract_text(page_index) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(
                        page = page_number,
                        error = %e,
                        "Native text extraction failed; page continues with images only"
                    );
                    String::new()
                }
            };

            let mut images = Vec::new();
            let extracted = doc.extract_images(page_index).unwrap_or_else(|e| {
                tracing::warn!(page = page_number, error = %e, "Image extraction failed");
                Vec::new()
            });
            for (image_index, image) in extracted.into_iter().enumerate() {
                let image_path = image_dir
                    .path()
                    .join(format!("page{page_number}_{}.png", image_index + 1));
                let encoded = image
                    .save_as_png(&image_path)
                    .map_err(|e| e.to_string())
                    .and_then(|()| std::fs::read(&image_path).map_err(|e| e.to_string()));
                match encoded {
                    Ok(bytes) => images.push(bytes),
                    Err(e) => tracing::warn!(
                        page = page_number,
                        image = image_index + 1,
                        error = %e,
                        "Skipping unreadable embedded image"
                    ),
                }
            }

            pages.push(PageContent {
                page_number,
                text,
                images,
            });
        }

        Ok(pages)
    }
}

#[async_trait]
impl PageSource for PdfOxidePageSource {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_pages(&self, data: &[u8]) -> Result<Vec<PageContent>, PageSourceError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            PageSourceError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            PageSourceError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_from_file(&temp_path)),
        )
        .await
        .map_err(|_| PageSourceError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| PageSourceError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(
            page_count = pages.len(),
            images = pages.iter().map(|p| p.images.len()).sum::<usize>(),
            "PDF page extraction complete"
        );
        Ok(pages)
    }
}
