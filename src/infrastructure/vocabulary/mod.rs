mod file_vocabulary_source;

pub use file_vocabulary_source::FileVocabularySource;
