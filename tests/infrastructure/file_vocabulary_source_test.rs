use std::fs;

use ocrclean::application::ports::{VocabularySource, VocabularySourceError};
use ocrclean::infrastructure::vocabulary::FileVocabularySource;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn given_word_list_with_comments_when_loading_then_skips_blank_and_comment_lines() {
    let dir = TempDir::new().unwrap();
    let words = write(&dir, "words.txt", "World\nword\n\n# comment\ncat\n");

    let resources = FileVocabularySource::new(words).load().unwrap();

    assert_eq!(resources.vocabulary.len(), 3);
    assert!(resources.vocabulary.contains("world"));
    assert!(!resources.vocabulary.contains("# comment"));
    assert!(resources.stopwords.is_empty());
}

#[test]
fn given_frequency_corpus_when_loading_then_counts_words_case_insensitively() {
    let dir = TempDir::new().unwrap();
    let words = write(&dir, "words.txt", "world\nword\n");
    let corpus = write(&dir, "corpus.txt", "world world word. The World!");

    let resources = FileVocabularySource::new(words)
        .with_frequency_corpus(corpus)
        .load()
        .unwrap();

    assert_eq!(resources.vocabulary.frequency("world"), 3);
    assert_eq!(resources.vocabulary.frequency("word"), 1);
    assert_eq!(resources.vocabulary.frequency("unseen"), 1);
}

#[test]
fn given_stopword_file_when_loading_then_stopwords_are_lowercased() {
    let dir = TempDir::new().unwrap();
    let words = write(&dir, "words.txt", "cat\n");
    let stopwords = write(&dir, "stopwords.txt", "The\nAND\n");

    let resources = FileVocabularySource::new(words)
        .with_stopwords(stopwords)
        .load()
        .unwrap();

    assert!(resources.stopwords.contains("the"));
    assert!(resources.stopwords.contains("and"));
}

#[test]
fn given_missing_word_list_when_loading_then_returns_read_error() {
    let dir = TempDir::new().unwrap();

    let result = FileVocabularySource::new(dir.path().join("missing.txt")).load();

    assert!(matches!(result, Err(VocabularySourceError::Read { .. })));
}

#[test]
fn given_only_comments_when_loading_then_returns_empty_word_list_error() {
    let dir = TempDir::new().unwrap();
    let words = write(&dir, "words.txt", "# nothing here\n\n");

    let result = FileVocabularySource::new(words).load();

    assert!(matches!(result, Err(VocabularySourceError::EmptyWordList(_))));
}
