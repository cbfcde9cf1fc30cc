use std::sync::{Arc, LazyLock};

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::processing_context::ProcessingContext;

const MIN_SENTENCE_WORDS: usize = 3;
const MIN_CONTENT_WORD_RATIO: f64 = 0.4;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static CAMEL_CASE_JOIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static PUNCTUATION_WITHOUT_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w[.!?])([A-Za-z])").unwrap());

/// Cleanup for text a PDF page yields natively, before it joins OCR output.
pub struct TextCleaner {
    context: Arc<ProcessingContext>,
}

impl TextCleaner {
    pub fn new(context: Arc<ProcessingContext>) -> Self {
        Self { context }
    }

    pub fn clean_native_text(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return raw.trim().to_string();
        }

        let normalized = normalize_layout(raw);

        let Some(sentence_tokenizer) = self.context.sentence_tokenizer() else {
            return normalized;
        };

        let kept: Vec<String> = sentence_tokenizer
            .sentences(&normalized)
            .into_iter()
            .map(|sentence| sentence.trim().to_string())
            .filter(|sentence| self.is_content_sentence(sentence))
            .collect();

        tracing::trace!(kept_sentences = kept.len(), "Native text cleaned");
        kept.join(" ")
    }

    fn is_content_sentence(&self, sentence: &str) -> bool {
        if sentence.split_whitespace().count() < MIN_SENTENCE_WORDS {
            return false;
        }

        let lowered = sentence.to_lowercase();
        let words: Vec<String> = match self.context.word_tokenizer() {
            Some(tokenizer) => tokenizer.tokenize(&lowered),
            None => lowered.split_whitespace().map(str::to_string).collect(),
        };
        if words.is_empty() {
            return false;
        }

        let stopwords = self.context.stopwords();
        let content_words = words
            .iter()
            .filter(|w| !stopwords.contains(w.as_str()) && w.chars().all(char::is_alphabetic))
            .count();

        content_words as f64 > words.len() as f64 * MIN_CONTENT_WORD_RATIO
    }
}

/// Ligatures and line-break hyphenation first, then whitespace, camelCase
/// joins and missing spaces after sentence punctuation.
fn normalize_layout(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let de_hyphenated = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");
    let collapsed = WHITESPACE_RUN.replace_all(&de_hyphenated, " ");
    let split_camel = CAMEL_CASE_JOIN.replace_all(&collapsed, "$1 $2");
    PUNCTUATION_WITHOUT_SPACE
        .replace_all(&split_camel, "$1 $2")
        .trim()
        .to_string()
}
