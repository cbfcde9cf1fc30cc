use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::SentenceTokenizer;

/// UAX #29 sentence boundaries.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSentenceTokenizer;

impl UnicodeSentenceTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl SentenceTokenizer for UnicodeSentenceTokenizer {
    fn sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
