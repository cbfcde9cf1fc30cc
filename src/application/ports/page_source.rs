use async_trait::async_trait;

/// Native text and embedded images of one document page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    pub page_number: u32,
    pub text: String,
    pub images: Vec<Vec<u8>>,
}

#[async_trait]
pub trait PageSource: Send + Sync {
    async fn extract_pages(&self, data: &[u8]) -> Result<Vec<PageContent>, PageSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PageSourceError {
    #[error("failed to parse document: {0}")]
    ParseFailed(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
