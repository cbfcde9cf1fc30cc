use std::sync::Arc;

use ocrclean::application::services::{ContentAnalyzer, ProcessingContext};
use ocrclean::domain::{ContentAnalysis, Difficulty};

use crate::helpers::full_context;

#[test]
fn given_empty_text_when_analyzing_then_returns_neutral_result() {
    let analyzer = ContentAnalyzer::new(full_context(&[]));

    assert_eq!(analyzer.analyze("   "), ContentAnalysis::empty());
}

#[test]
fn given_no_tagger_when_analyzing_then_ranks_long_words_by_frequency() {
    let analyzer = ContentAnalyzer::new(Arc::new(ProcessingContext::builder().build()));

    let analysis = analyzer.analyze(
        "Quantum computing uses quantum mechanics. Quantum computing is powerful.",
    );

    assert_eq!(
        analysis.concepts,
        vec!["Quantum", "Computing", "Mechanics", "Powerful"]
    );
    assert_eq!(analysis.key_topics, vec!["Quantum", "Computing", "Mechanics"]);
    assert_eq!(analysis.word_count, 9);
    assert_eq!(analysis.difficulty, Difficulty::Advanced);
    assert_eq!(analysis.estimated_reading_time, 1);
    assert_eq!(analysis.confidence_score, 0.15);
}

#[test]
fn given_tagger_when_analyzing_then_recurring_nouns_become_concepts() {
    let analyzer = ContentAnalyzer::new(full_context(&[]));

    let analysis = analyzer.analyze(
        "Marie Curie studied radioactivity. Radioactivity research changed physics. \
         Curie won prizes.",
    );

    assert_eq!(analysis.concepts, vec!["Curie", "Radioactivity"]);
    assert_eq!(analysis.key_topics, vec!["Marie", "Curie", "Radioactivity"]);
}

#[test]
fn given_plain_short_words_when_analyzing_then_difficulty_is_beginner() {
    let analyzer = ContentAnalyzer::new(full_context(&[]));

    let analysis = analyzer.analyze("The cat sat on the mat and the dog ran to it.");

    assert_eq!(analysis.difficulty, Difficulty::Beginner);
}

#[test]
fn given_long_text_when_analyzing_then_confidence_is_capped() {
    let analyzer = ContentAnalyzer::new(full_context(&[]));
    let text = "word ".repeat(600);

    let analysis = analyzer.analyze(&text);

    assert_eq!(analysis.confidence_score, 1.0);
    assert_eq!(analysis.estimated_reading_time, 3);
}
