use std::collections::{BTreeMap, HashMap, HashSet};

use super::correction::CorrectionCandidate;
use super::edit_distance::edit_distance;

/// Known words plus corpus frequencies, built once and shared read-only.
///
/// Words are bucketed by character length. A lookup with distance `d` only
/// visits buckets within `d` of the query length, which is exactly the set a
/// full scan would keep after its length filter.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: HashSet<String>,
    by_length: BTreeMap<usize, Vec<String>>,
    frequencies: HashMap<String, u64>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I, frequencies: HashMap<String, u64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for word in &words {
            by_length
                .entry(word.chars().count())
                .or_default()
                .push(word.clone());
        }
        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
        }

        Self {
            words,
            by_length,
            frequencies,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Corpus frequency, falling back to 1 for words the corpus never saw.
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(1)
    }

    /// Every vocabulary word within `max_distance` edits of `word`, ranked.
    pub fn candidates(&self, word: &str, max_distance: usize) -> Vec<CorrectionCandidate> {
        let length = word.chars().count();
        let lower = length.saturating_sub(max_distance);
        let upper = length.saturating_add(max_distance);

        let mut candidates: Vec<CorrectionCandidate> = self
            .by_length
            .range(lower..=upper)
            .flat_map(|(_, bucket)| bucket.iter())
            .filter_map(|candidate| {
                let distance = edit_distance(word, candidate);
                (distance <= max_distance).then(|| CorrectionCandidate {
                    word: candidate.clone(),
                    distance,
                    frequency: self.frequency(candidate),
                })
            })
            .collect();

        candidates.sort_by(|a, b| a.rank(b));
        candidates
    }

    pub fn best_match(&self, word: &str, max_distance: usize) -> Option<CorrectionCandidate> {
        self.candidates(word, max_distance).into_iter().next()
    }
}
