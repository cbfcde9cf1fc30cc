use serde::Serialize;

/// Coarse part-of-speech class used to pick surface substitutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PosClass {
    Noun,
    Verb,
    Determiner,
    Other,
    Punctuation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: Option<PosClass>,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: Option<PosClass>) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }

    pub fn is_punctuation(&self) -> bool {
        is_punctuation(&self.text)
    }
}

pub(crate) fn is_punctuation(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_punctuation())
}
