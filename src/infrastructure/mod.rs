pub mod ocr;
pub mod observability;
pub mod pdf;
pub mod summarization;
pub mod text_processing;
pub mod vocabulary;
