/// Contiguous, sentence-aligned slice of a document sent to the summarizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub sentences: Vec<String>,
    pub word_count: usize,
}

impl Chunk {
    pub fn new(index: usize, sentences: Vec<String>) -> Self {
        let word_count = sentences
            .iter()
            .map(|s| s.split_whitespace().count())
            .sum();
        Self {
            index,
            sentences,
            word_count,
        }
    }

    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }

    /// True when the chunk exceeds `budget` only because it holds one
    /// sentence that is longer than the budget by itself.
    pub fn is_oversized_sentence(&self, budget: usize) -> bool {
        self.word_count > budget && self.sentences.len() == 1
    }
}
