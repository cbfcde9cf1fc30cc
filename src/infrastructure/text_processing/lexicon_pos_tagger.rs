use std::collections::HashMap;

use crate::application::ports::PosTagger;
use crate::domain::PosClass;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "each", "every", "no", "tlle", "tl1e",
];

const FUNCTION_WORDS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "and", "or", "but",
    "nor", "so", "yet", "if", "then", "than", "because", "while", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "into", "onto", "over", "under", "about", "after", "before",
    "between", "through", "during", "without", "within", "not", "very", "also", "too", "here",
    "there", "when", "where", "why", "how", "what", "which", "who", "whom", "whose",
];

const COMMON_VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had", "do", "does",
    "did", "can", "could", "will", "would", "shall", "should", "may", "might", "must", "sat",
    "ran", "went", "made", "said", "saw", "took", "gave", "found", "came", "became", "began",
    "get", "got", "make", "use", "see", "go", "run", "take", "give", "find", "know", "think",
];

const VERB_SUFFIXES: &[&str] = &["ing", "1ng", "ed", "ize", "ise", "ify"];
const MODIFIER_SUFFIXES: &[&str] = &["ly", "ous", "ful", "ive", "able", "ible", "less"];

/// Closed-class lexicon with suffix heuristics; open-class words default to
/// nouns.
pub struct LexiconPosTagger {
    lexicon: HashMap<&'static str, PosClass>,
}

impl Default for LexiconPosTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconPosTagger {
    pub fn new() -> Self {
        let mut lexicon = HashMap::new();
        for word in FUNCTION_WORDS {
            lexicon.insert(*word, PosClass::Other);
        }
        for word in COMMON_VERBS {
            lexicon.insert(*word, PosClass::Verb);
        }
        for word in DETERMINERS {
            lexicon.insert(*word, PosClass::Determiner);
        }
        Self { lexicon }
    }

    fn classify(&self, token: &str) -> PosClass {
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation()) {
            return PosClass::Punctuation;
        }

        let lowered = token.to_lowercase();
        if let Some(class) = self.lexicon.get(lowered.as_str()) {
            return *class;
        }
        if lowered.chars().all(|c| c.is_numeric() || c == '.' || c == ',') {
            return PosClass::Other;
        }

        let long_enough = lowered.chars().count() > 4;
        if long_enough && VERB_SUFFIXES.iter().any(|s| lowered.ends_with(s)) {
            return PosClass::Verb;
        }
        if long_enough && MODIFIER_SUFFIXES.iter().any(|s| lowered.ends_with(s)) {
            return PosClass::Other;
        }

        PosClass::Noun
    }
}

impl PosTagger for LexiconPosTagger {
    fn tag(&self, tokens: &[String]) -> Vec<PosClass> {
        tokens.iter().map(|token| self.classify(token)).collect()
    }
}
