use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Unknown,
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Classifies by the share of words longer than eight characters.
    pub fn from_complexity_ratio(ratio: f64) -> Self {
        if ratio > 0.15 {
            Self::Advanced
        } else if ratio > 0.08 {
            Self::Intermediate
        } else {
            Self::Beginner
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub concepts: Vec<String>,
    pub difficulty: Difficulty,
    pub word_count: usize,
    pub estimated_reading_time: usize,
    pub key_topics: Vec<String>,
    pub confidence_score: f64,
}

impl ContentAnalysis {
    pub fn empty() -> Self {
        Self {
            concepts: Vec::new(),
            difficulty: Difficulty::Unknown,
            word_count: 0,
            estimated_reading_time: 0,
            key_topics: Vec::new(),
            confidence_score: 0.0,
        }
    }
}
