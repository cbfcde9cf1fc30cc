use std::cmp::Ordering;

/// A dictionary word considered as the replacement for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionCandidate {
    pub word: String,
    pub distance: usize,
    pub frequency: u64,
}

impl CorrectionCandidate {
    /// Ranking order: closer first, then more frequent, then alphabetical so
    /// the winner never depends on iteration order.
    pub fn rank(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.frequency.cmp(&self.frequency))
            .then_with(|| self.word.cmp(&other.word))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionResult {
    pub text: String,
    /// Absolute difference between raw and corrected whitespace word counts.
    /// Same-length substitutions are not counted.
    pub corrections_applied: usize,
}

impl CorrectionResult {
    pub fn between(raw: &str, corrected: String) -> Self {
        let corrections_applied = word_count(raw).abs_diff(word_count(&corrected));
        Self {
            text: corrected,
            corrections_applied,
        }
    }

    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            corrections_applied: 0,
        }
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
