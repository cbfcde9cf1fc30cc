use ocrclean::domain::Chunk;

#[test]
fn given_sentences_when_creating_chunk_then_counts_words() {
    let chunk = Chunk::new(
        0,
        vec!["The cat sat.".to_string(), "It was warm.".to_string()],
    );

    assert_eq!(chunk.word_count, 6);
    assert_eq!(chunk.text(), "The cat sat. It was warm.");
}

#[test]
fn given_single_long_sentence_when_checking_budget_then_is_oversized() {
    let chunk = Chunk::new(3, vec!["a b c d e f.".to_string()]);

    assert!(chunk.is_oversized_sentence(4));
    assert!(!chunk.is_oversized_sentence(6));
}

#[test]
fn given_two_sentences_over_budget_when_checking_then_is_not_single_sentence_overflow() {
    let chunk = Chunk::new(0, vec!["a b c.".to_string(), "d e f.".to_string()]);

    assert!(!chunk.is_oversized_sentence(4));
}
