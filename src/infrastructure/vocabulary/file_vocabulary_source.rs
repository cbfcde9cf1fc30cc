use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::application::ports::{LexicalResources, VocabularySource, VocabularySourceError};
use crate::domain::Vocabulary;

/// Plain-text lexical resources: a word list (one word per line), an optional
/// frequency corpus and an optional stopword list (one per line).
#[derive(Debug, Clone)]
pub struct FileVocabularySource {
    word_list: PathBuf,
    frequency_corpus: Option<PathBuf>,
    stopwords: Option<PathBuf>,
}

impl FileVocabularySource {
    pub fn new(word_list: impl Into<PathBuf>) -> Self {
        Self {
            word_list: word_list.into(),
            frequency_corpus: None,
            stopwords: None,
        }
    }

    pub fn with_frequency_corpus(mut self, path: impl Into<PathBuf>) -> Self {
        self.frequency_corpus = Some(path.into());
        self
    }

    pub fn with_stopwords(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords = Some(path.into());
        self
    }
}

impl VocabularySource for FileVocabularySource {
    #[tracing::instrument(skip(self), fields(word_list = %self.word_list.display()))]
    fn load(&self) -> Result<LexicalResources, VocabularySourceError> {
        let words = read_lines(&self.word_list)?;
        if words.is_empty() {
            return Err(VocabularySourceError::EmptyWordList(
                self.word_list.display().to_string(),
            ));
        }

        let frequencies = match &self.frequency_corpus {
            Some(path) => count_frequencies(&read_to_string(path)?),
            None => HashMap::new(),
        };

        let stopwords: HashSet<String> = match &self.stopwords {
            Some(path) => read_lines(path)?.into_iter().collect(),
            None => HashSet::new(),
        };

        tracing::debug!(
            words = words.len(),
            frequency_entries = frequencies.len(),
            stopwords = stopwords.len(),
            "Vocabulary files read"
        );

        Ok(LexicalResources {
            vocabulary: Vocabulary::new(words, frequencies),
            stopwords,
        })
    }
}

fn read_to_string(path: &Path) -> Result<String, VocabularySourceError> {
    std::fs::read_to_string(path).map_err(|source| VocabularySourceError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn read_lines(path: &Path) -> Result<Vec<String>, VocabularySourceError> {
    Ok(read_to_string(path)?
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect())
}

/// Counts lowercase alphabetic tokens of a plain-text corpus.
fn count_frequencies(corpus: &str) -> HashMap<String, u64> {
    let mut frequencies = HashMap::new();
    for token in corpus
        .split(|c: char| !c.is_alphabetic())
        .filter(|t| !t.is_empty())
    {
        *frequencies.entry(token.to_lowercase()).or_insert(0) += 1;
    }
    frequencies
}
