use crate::domain::{Chunk, SummaryConfig, SummaryPlan, word_count};

use super::sentence_splitter::split_sentences;

/// Splits text into sentence-aligned chunks under a word budget.
#[derive(Debug, Clone)]
pub struct ChunkPlanner {
    max_words_per_chunk: usize,
    max_chunks: usize,
    trim_word_budget: Option<usize>,
}

impl ChunkPlanner {
    pub fn new(max_words_per_chunk: usize, max_chunks: usize, trim_word_budget: Option<usize>) -> Self {
        Self {
            max_words_per_chunk,
            max_chunks,
            trim_word_budget,
        }
    }

    pub fn from_config(config: &SummaryConfig) -> Self {
        Self::new(
            config.max_words_per_chunk,
            config.max_chunks,
            config.trim_word_budget,
        )
    }

    pub fn plan(&self, text: &str) -> SummaryPlan {
        let words: Vec<&str> = text.split_whitespace().collect();
        let original_words = words.len();

        let (working_text, trimmed_words) = match self.trim_word_budget {
            Some(budget) if original_words > budget => {
                (words[..budget].join(" "), original_words - budget)
            }
            _ => (text.to_string(), 0),
        };

        let mut chunks = self.pack(split_sentences(&working_text));
        let dropped = chunks.len().saturating_sub(self.max_chunks);
        chunks.truncate(self.max_chunks);

        tracing::debug!(
            original_words,
            trimmed_words,
            chunks = chunks.len(),
            dropped_chunks = dropped,
            "Chunk plan ready"
        );

        SummaryPlan {
            original_words,
            trim_threshold: self.trim_word_budget,
            trimmed_words,
            chunks,
        }
    }

    /// Greedy packing in document order. A sentence that alone exceeds the
    /// budget becomes its own chunk; sentences are never split.
    pub fn pack(&self, sentences: Vec<String>) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut current_words = 0;

        for sentence in sentences {
            let sentence_words = word_count(&sentence);
            if !current.is_empty() && current_words + sentence_words > self.max_words_per_chunk {
                chunks.push(Chunk::new(chunks.len(), std::mem::take(&mut current)));
                current_words = 0;
            }
            current.push(sentence);
            current_words += sentence_words;
        }

        if !current.is_empty() {
            chunks.push(Chunk::new(chunks.len(), current));
        }

        chunks
    }
}
