mod http_summarizer;
mod mock_summarizer;
mod summarizer_factory;

pub use http_summarizer::HttpSummarizer;
pub use mock_summarizer::MockSummarizer;
pub use summarizer_factory::{SummarizerFactory, SummarizerFactoryError};
