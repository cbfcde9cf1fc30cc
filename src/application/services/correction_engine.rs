use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::domain::{CorrectionResult, PosClass, Token};

use super::processing_context::ProcessingContext;
use super::sentence_splitter::split_sentences;
use super::simple_corrector::simple_correct;

pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Determiner spellings OCR produces for "the".
const DETERMINER_ARTIFACTS: [&str; 2] = ["tlle", "tl1e"];

const NOUN_SUBSTITUTIONS: [(&str, &str); 2] = [("rn", "m"), ("cl", "d")];
const VERB_SUBSTITUTIONS: [(&str, &str); 1] = [("1ng", "ing")];
const DIGIT_CONFUSABLES: [(char, &str); 4] = [('0', "o"), ('1', "l"), ('5', "S"), ('8', "B")];

static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.!?;:])").unwrap());
static SPACE_AFTER_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([,.!?;:])\s*([A-Za-z])").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionConfig {
    pub max_edit_distance: usize,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }
}

/// Token-level OCR correction: POS-conditioned surface substitutions, digit
/// confusables, then dictionary spell correction.
pub struct CorrectionEngine {
    context: Arc<ProcessingContext>,
    config: CorrectionConfig,
}

impl CorrectionEngine {
    pub fn new(context: Arc<ProcessingContext>, config: CorrectionConfig) -> Self {
        Self { context, config }
    }

    pub fn context(&self) -> &Arc<ProcessingContext> {
        &self.context
    }

    #[tracing::instrument(skip(self, text), fields(input_chars = text.len()))]
    pub fn correct(&self, text: &str) -> CorrectionResult {
        if text.trim().is_empty() {
            return CorrectionResult::unchanged(text);
        }

        let corrected = if self.context.capabilities().supports_full_correction() {
            self.correct_tokenized(text)
        } else {
            tracing::debug!("No word tokenizer; using simple correction mode");
            simple_correct(text)
        };

        let result = CorrectionResult::between(text, corrected);
        tracing::debug!(
            corrections_applied = result.corrections_applied,
            "Correction complete"
        );
        result
    }

    /// Closest vocabulary word within the configured distance, lowercased.
    /// Known words and an empty vocabulary short-circuit; no match returns
    /// the lowercased input.
    pub fn spell_check(&self, word: &str) -> String {
        self.spell_check_within(word, self.config.max_edit_distance)
    }

    pub fn spell_check_within(&self, word: &str, max_distance: usize) -> String {
        let word = word.to_lowercase();
        let vocabulary = self.context.vocabulary();
        if vocabulary.is_empty() || vocabulary.contains(&word) {
            return word;
        }

        match vocabulary.best_match(&word, max_distance) {
            Some(candidate) => candidate.word,
            None => word,
        }
    }

    fn correct_tokenized(&self, text: &str) -> String {
        let sentences = match self.context.sentence_tokenizer() {
            Some(tokenizer) => tokenizer.sentences(text),
            None => split_sentences(text),
        };

        let corrected: Vec<String> = sentences
            .iter()
            .map(|sentence| self.correct_sentence(sentence))
            .collect();

        WHITESPACE_RUN
            .replace_all(&corrected.join(" "), " ")
            .trim()
            .to_string()
    }

    fn correct_sentence(&self, sentence: &str) -> String {
        let Some(tokenizer) = self.context.word_tokenizer() else {
            return sentence.to_string();
        };
        let words = tokenizer.tokenize(sentence);
        let tags = self.context.tagger().map(|tagger| tagger.tag(&words));

        let corrected: Vec<String> = words
            .into_iter()
            .enumerate()
            .map(|(i, word)| {
                let pos = tags.as_ref().and_then(|t| t.get(i).copied());
                self.correct_token(&Token::new(word, pos))
            })
            .collect();

        let joined = corrected.join(" ");
        let tightened = SPACE_BEFORE_PUNCTUATION.replace_all(&joined, "${1}");
        SPACE_AFTER_PUNCTUATION
            .replace_all(&tightened, "${1} ${2}")
            .into_owned()
    }

    fn correct_token(&self, token: &Token) -> String {
        if token.is_punctuation() {
            return token.text.clone();
        }

        let mut word = apply_pos_rules(&token.text, token.pos);

        if has_digit_and_letter(&word) {
            for (digit, letter) in DIGIT_CONFUSABLES {
                word = word.replace(digit, letter);
            }
        }

        if word.chars().count() > 1 && word.chars().all(char::is_alphabetic) {
            let checked = self.spell_check(&word);
            return restore_leading_capital(&token.text, checked);
        }

        word
    }
}

fn apply_pos_rules(word: &str, pos: Option<PosClass>) -> String {
    match pos {
        Some(PosClass::Noun) => NOUN_SUBSTITUTIONS
            .iter()
            .fold(word.to_string(), |acc, (from, to)| acc.replace(from, to)),
        Some(PosClass::Verb) => VERB_SUBSTITUTIONS
            .iter()
            .fold(word.to_string(), |acc, (from, to)| acc.replace(from, to)),
        Some(PosClass::Determiner)
            if DETERMINER_ARTIFACTS.contains(&word.to_lowercase().as_str()) =>
        {
            "the".to_string()
        }
        _ => word.to_string(),
    }
}

fn has_digit_and_letter(word: &str) -> bool {
    word.chars().any(|c| c.is_numeric()) && word.chars().any(char::is_alphabetic)
}

/// Spell correction lowercases; a sentence-initial or proper-noun capital on
/// the source token is put back.
fn restore_leading_capital(source: &str, corrected: String) -> String {
    let starts_upper = source.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return corrected;
    }

    let mut chars = corrected.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
