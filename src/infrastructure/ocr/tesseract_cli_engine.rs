use std::io::Write;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{OcrEngine, OcrEngineError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesseractOptions {
    pub binary_path: String,
    pub language: String,
    pub page_segmentation_mode: u8,
    pub engine_mode: u8,
}

impl Default for TesseractOptions {
    fn default() -> Self {
        Self {
            binary_path: "tesseract".to_string(),
            language: "eng".to_string(),
            page_segmentation_mode: 6,
            engine_mode: 3,
        }
    }
}

/// Runs the `tesseract` binary on an image written to a temp file and reads
/// the recognized text from stdout.
pub struct TesseractCliEngine {
    options: TesseractOptions,
}

impl TesseractCliEngine {
    pub fn new(options: TesseractOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl OcrEngine for TesseractCliEngine {
    #[tracing::instrument(skip(self, image), fields(bytes = image.len()))]
    async fn run_ocr(&self, image: &[u8]) -> Result<String, OcrEngineError> {
        let mut temp_file = tempfile::NamedTempFile::new()?;
        temp_file.write_all(image)?;
        temp_file.flush()?;

        let output = Command::new(&self.options.binary_path)
            .arg(temp_file.path())
            .arg("stdout")
            .arg("--oem")
            .arg(self.options.engine_mode.to_string())
            .arg("--psm")
            .arg(self.options.page_segmentation_mode.to_string())
            .arg("-l")
            .arg(&self.options.language)
            .output()
            .await
            .map_err(|e| {
                OcrEngineError::Unavailable(format!(
                    "failed to run {}: {e}",
                    self.options.binary_path
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrEngineError::RecognitionFailed(format!(
                "exit code {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::debug!(chars = text.len(), "OCR complete");
        Ok(text)
    }
}
