use std::collections::HashSet;

use crate::domain::Vocabulary;

/// Word list, frequency corpus and stopwords, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct LexicalResources {
    pub vocabulary: Vocabulary,
    pub stopwords: HashSet<String>,
}

pub trait VocabularySource: Send + Sync {
    fn load(&self) -> Result<LexicalResources, VocabularySourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VocabularySourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("word list is empty: {0}")]
    EmptyWordList(String),
}
