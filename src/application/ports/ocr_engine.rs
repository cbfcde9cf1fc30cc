use async_trait::async_trait;

#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn run_ocr(&self, image: &[u8]) -> Result<String, OcrEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrEngineError {
    #[error("ocr engine unavailable: {0}")]
    Unavailable(String),
    #[error("ocr failed: {0}")]
    RecognitionFailed(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
