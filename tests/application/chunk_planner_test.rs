use ocrclean::application::services::{ChunkPlanner, split_sentences};

use crate::helpers::ten_word_sentences;

fn sentences(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn given_sentences_within_budget_when_packing_then_fills_chunks_greedily() {
    let planner = ChunkPlanner::new(6, 8, None);

    let chunks = planner.pack(sentences(&["a b c.", "d e f.", "g h i."]));

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].sentences, sentences(&["a b c.", "d e f."]));
    assert_eq!(chunks[0].word_count, 6);
    assert_eq!(chunks[1].sentences, sentences(&["g h i."]));
    assert_eq!(chunks[1].index, 1);
}

#[test]
fn given_sentence_longer_than_budget_when_packing_then_it_becomes_its_own_chunk() {
    let planner = ChunkPlanner::new(3, 8, None);

    let chunks = planner.pack(sentences(&["one two.", "a b c d e f.", "x y."]));

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[1].sentences, sentences(&["a b c d e f."]));
    assert!(chunks[1].is_oversized_sentence(3));
    for chunk in [&chunks[0], &chunks[2]] {
        assert!(chunk.word_count <= 3);
    }
}

#[test]
fn given_more_chunks_than_cap_when_planning_then_trailing_chunks_are_dropped() {
    let planner = ChunkPlanner::new(10, 2, None);

    let plan = planner.plan(&ten_word_sentences(5));

    assert_eq!(plan.chunks.len(), 2);
    assert_eq!(plan.chunks[0].index, 0);
    assert_eq!(plan.chunks[1].index, 1);
    assert_eq!(plan.original_words, 50);
}

#[test]
fn given_long_text_when_planning_then_sentences_keep_order_without_duplicates() {
    let text = "Alpha starts here. Beta follows on! Gamma asks why? Delta answers plainly. \
                Epsilon closes the text.";
    let planner = ChunkPlanner::new(5, 8, None);

    let plan = planner.plan(text);

    let flattened: Vec<String> = plan
        .chunks
        .iter()
        .flat_map(|c| c.sentences.iter().cloned())
        .collect();
    assert_eq!(flattened, split_sentences(text));
    for chunk in &plan.chunks {
        assert!(chunk.word_count <= 5 || chunk.is_oversized_sentence(5));
    }
}

#[test]
fn given_text_over_trim_budget_when_planning_then_only_leading_words_are_kept() {
    let planner = ChunkPlanner::new(400, 8, Some(600));

    let plan = planner.plan(&ten_word_sentences(100));

    assert_eq!(plan.original_words, 1000);
    assert!(plan.trimmed());
    assert_eq!(plan.trimmed_words, 400);
    assert_eq!(plan.trim_threshold, Some(600));
    let planned_words: usize = plan.chunks.iter().map(|c| c.word_count).sum();
    assert_eq!(planned_words, 600);
}

#[test]
fn given_text_under_trim_budget_when_planning_then_nothing_is_trimmed() {
    let planner = ChunkPlanner::new(400, 8, Some(600));

    let plan = planner.plan(&ten_word_sentences(10));

    assert!(!plan.trimmed());
    assert_eq!(plan.trimmed_words, 0);
    assert_eq!(plan.chunks.len(), 1);
}
