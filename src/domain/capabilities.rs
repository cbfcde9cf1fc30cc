use serde::Serialize;

/// Which optional collaborators were available when the processing context
/// was built. Checked instead of probing collaborators on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub has_tokenizer: bool,
    pub has_sentence_tokenizer: bool,
    pub has_tagger: bool,
    pub has_vocabulary: bool,
    pub has_summarizer: bool,
}

impl Capabilities {
    /// Tokenized, POS-aware correction needs at least a word tokenizer.
    pub fn supports_full_correction(&self) -> bool {
        self.has_tokenizer
    }
}
