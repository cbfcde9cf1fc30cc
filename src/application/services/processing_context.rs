use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::{
    LexicalResources, PosTagger, SentenceTokenizer, Summarizer, VocabularySource,
    WordTokenizer,
};
use crate::domain::{Capabilities, Vocabulary};

/// Process-wide, read-only collaborators shared by every correction and
/// summarization call. Built once through [`ProcessingContextBuilder`].
pub struct ProcessingContext {
    vocabulary: Vocabulary,
    stopwords: HashSet<String>,
    sentence_tokenizer: Option<Arc<dyn SentenceTokenizer>>,
    word_tokenizer: Option<Arc<dyn WordTokenizer>>,
    tagger: Option<Arc<dyn PosTagger>>,
    summarizer: Option<Arc<dyn Summarizer>>,
    capabilities: Capabilities,
}

impl ProcessingContext {
    pub fn builder() -> ProcessingContextBuilder {
        ProcessingContextBuilder::default()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    pub fn sentence_tokenizer(&self) -> Option<&dyn SentenceTokenizer> {
        self.sentence_tokenizer.as_deref()
    }

    pub fn word_tokenizer(&self) -> Option<&dyn WordTokenizer> {
        self.word_tokenizer.as_deref()
    }

    pub fn tagger(&self) -> Option<&dyn PosTagger> {
        self.tagger.as_deref()
    }

    pub fn summarizer(&self) -> Option<Arc<dyn Summarizer>> {
        self.summarizer.clone()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}

#[derive(Default)]
pub struct ProcessingContextBuilder {
    resources: LexicalResources,
    sentence_tokenizer: Option<Arc<dyn SentenceTokenizer>>,
    word_tokenizer: Option<Arc<dyn WordTokenizer>>,
    tagger: Option<Arc<dyn PosTagger>>,
    summarizer: Option<Arc<dyn Summarizer>>,
}

impl ProcessingContextBuilder {
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.resources.vocabulary = vocabulary;
        self
    }

    pub fn stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    pub fn lexical_resources(mut self, resources: LexicalResources) -> Self {
        self.resources = resources;
        self
    }

    /// Loads vocabulary and stopwords from `source`. A failing source is a
    /// degradation, not an error: the context is built with empty resources.
    pub fn load_resources(self, source: &dyn VocabularySource) -> Self {
        match source.load() {
            Ok(resources) => {
                tracing::info!(
                    words = resources.vocabulary.len(),
                    stopwords = resources.stopwords.len(),
                    "Lexical resources loaded"
                );
                self.lexical_resources(resources)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Lexical resources unavailable; spell correction disabled"
                );
                self
            }
        }
    }

    pub fn sentence_tokenizer(mut self, tokenizer: Arc<dyn SentenceTokenizer>) -> Self {
        self.sentence_tokenizer = Some(tokenizer);
        self
    }

    pub fn word_tokenizer(mut self, tokenizer: Arc<dyn WordTokenizer>) -> Self {
        self.word_tokenizer = Some(tokenizer);
        self
    }

    pub fn tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    pub fn summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn maybe_summarizer(mut self, summarizer: Option<Arc<dyn Summarizer>>) -> Self {
        self.summarizer = summarizer;
        self
    }

    pub fn build(self) -> ProcessingContext {
        let capabilities = Capabilities {
            has_tokenizer: self.word_tokenizer.is_some(),
            has_sentence_tokenizer: self.sentence_tokenizer.is_some(),
            has_tagger: self.tagger.is_some(),
            has_vocabulary: !self.resources.vocabulary.is_empty(),
            has_summarizer: self.summarizer.is_some(),
        };

        tracing::debug!(?capabilities, "Processing context resolved");

        ProcessingContext {
            vocabulary: self.resources.vocabulary,
            stopwords: self.resources.stopwords,
            sentence_tokenizer: self.sentence_tokenizer,
            word_tokenizer: self.word_tokenizer,
            tagger: self.tagger,
            summarizer: self.summarizer,
            capabilities,
        }
    }
}
