use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::{ContentAnalysis, Difficulty, PosClass};

use super::processing_context::ProcessingContext;

const WORDS_PER_MINUTE: f64 = 200.0;
const COMPLEX_WORD_MIN_CHARS: usize = 9;
const TAGGED_CONCEPT_LIMIT: usize = 8;
const TAGGED_TOPIC_LIMIT: usize = 5;
const FALLBACK_CONCEPT_LIMIT: usize = 6;
const FALLBACK_TOPIC_LIMIT: usize = 3;

const BASIC_STOPWORDS: [&str; 16] = [
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "this", "that",
    "these", "those",
];

/// Lightweight reader-facing statistics over extracted text: recurring
/// concepts, key topics, difficulty and reading time.
pub struct ContentAnalyzer {
    context: Arc<ProcessingContext>,
}

impl ContentAnalyzer {
    pub fn new(context: Arc<ProcessingContext>) -> Self {
        Self { context }
    }

    #[tracing::instrument(skip(self, text), fields(input_chars = text.len()))]
    pub fn analyze(&self, text: &str) -> ContentAnalysis {
        if text.trim().is_empty() {
            return ContentAnalysis::empty();
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        let word_count = words.len();

        let (concepts, key_topics) = match self.tagged_concepts(text) {
            Some(found) => found,
            None => self.frequency_concepts(&words),
        };

        let complex_words = words
            .iter()
            .filter(|w| w.chars().count() >= COMPLEX_WORD_MIN_CHARS)
            .count();
        let difficulty =
            Difficulty::from_complexity_ratio(complex_words as f64 / word_count.max(1) as f64);

        let estimated_reading_time = ((word_count as f64 / WORDS_PER_MINUTE).round() as usize).max(1);

        let confidence = (word_count as f64 / 100.0) * 0.8 + (concepts.len() as f64 / 10.0) * 0.2;
        let confidence_score = (confidence.clamp(0.1, 1.0) * 100.0).round() / 100.0;

        tracing::debug!(
            word_count,
            concepts = concepts.len(),
            difficulty = ?difficulty,
            "Content analyzed"
        );

        ContentAnalysis {
            concepts,
            difficulty,
            word_count,
            estimated_reading_time,
            key_topics,
            confidence_score,
        }
    }

    /// Nouns from the tagger: recurring ones become concepts, capitalized
    /// ones stand in for proper nouns.
    fn tagged_concepts(&self, text: &str) -> Option<(Vec<String>, Vec<String>)> {
        let tokenizer = self.context.word_tokenizer()?;
        let tagger = self.context.tagger()?;

        let tokens = tokenizer.tokenize(text);
        let tags = tagger.tag(&tokens);
        let stopwords = self.context.stopwords();

        let mut nouns = Vec::new();
        let mut key_topics: Vec<String> = Vec::new();
        for (token, pos) in tokens.iter().zip(tags) {
            if pos != PosClass::Noun {
                continue;
            }
            let lowered = token.to_lowercase();
            if lowered.chars().count() > 3 && !stopwords.contains(&lowered) {
                nouns.push(lowered);
            }
            let capitalized = token.chars().next().is_some_and(char::is_uppercase);
            if capitalized
                && token.chars().count() > 2
                && key_topics.len() < TAGGED_TOPIC_LIMIT
                && !key_topics.contains(token)
            {
                key_topics.push(token.clone());
            }
        }

        let concepts = most_common(&nouns, TAGGED_CONCEPT_LIMIT)
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(word, _)| title_case(&word))
            .collect();

        Some((concepts, key_topics))
    }

    fn frequency_concepts(&self, words: &[&str]) -> (Vec<String>, Vec<String>) {
        let loaded = self.context.stopwords();
        let basic: HashSet<String> = BASIC_STOPWORDS.iter().map(|w| w.to_string()).collect();
        let stopwords = if loaded.is_empty() { &basic } else { loaded };

        let cleaned: Vec<String> = words
            .iter()
            .filter(|w| w.chars().count() > 4)
            .map(|w| w.to_lowercase())
            .filter(|w| !stopwords.contains(w))
            .map(|w| w.trim_matches(|c| ".,!?;:".contains(c)).to_string())
            .collect();

        let concepts: Vec<String> = most_common(&cleaned, FALLBACK_CONCEPT_LIMIT)
            .into_iter()
            .map(|(word, _)| title_case(&word))
            .collect();
        let key_topics = concepts.iter().take(FALLBACK_TOPIC_LIMIT).cloned().collect();

        (concepts, key_topics)
    }
}

/// Highest counts first; equal counts keep first-seen order.
fn most_common(items: &[String], limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, item) in items.iter().enumerate() {
        counts.entry(item.as_str()).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(item, (count, first_seen))| (item, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(item, count, _)| (item.to_string(), count))
        .collect()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
