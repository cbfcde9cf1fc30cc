mod ocr_engine;
mod page_source;
mod pos_tagger;
mod sentence_tokenizer;
mod summarizer;
mod vocabulary_source;
mod word_tokenizer;

pub use ocr_engine::{OcrEngine, OcrEngineError};
pub use page_source::{PageContent, PageSource, PageSourceError};
pub use pos_tagger::PosTagger;
pub use sentence_tokenizer::SentenceTokenizer;
pub use summarizer::{Summarizer, SummarizerError};
pub use vocabulary_source::{LexicalResources, VocabularySource, VocabularySourceError};
pub use word_tokenizer::WordTokenizer;
