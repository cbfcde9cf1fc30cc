use std::sync::Arc;

use ocrclean::application::services::{ProcessingContext, TextCleaner};
use ocrclean::infrastructure::text_processing::{UnicodeSentenceTokenizer, UnicodeWordTokenizer};

const STOPWORDS: [&str; 8] = ["the", "of", "and", "to", "a", "it", "is", "over"];

fn tokenizing_cleaner() -> TextCleaner {
    let context = ProcessingContext::builder()
        .stopwords(STOPWORDS)
        .sentence_tokenizer(Arc::new(UnicodeSentenceTokenizer::new()))
        .word_tokenizer(Arc::new(UnicodeWordTokenizer::new()))
        .build();
    TextCleaner::new(Arc::new(context))
}

#[test]
fn given_no_sentence_tokenizer_when_cleaning_then_only_layout_is_normalized() {
    let cleaner = TextCleaner::new(Arc::new(ProcessingContext::builder().build()));

    let cleaned = cleaner.clean_native_text("ﬁnancial  data-\nbase camelCase.Next ");

    assert_eq!(cleaned, "financial database camel Case. Next");
}

#[test]
fn given_short_and_stopword_sentences_when_cleaning_then_they_are_dropped() {
    let cleaner = tokenizing_cleaner();

    let cleaned = cleaner.clean_native_text(
        "The quick brown fox jumps over the lazy dog. It is. Of the and to a it.",
    );

    assert_eq!(cleaned, "The quick brown fox jumps over the lazy dog.");
}

#[test]
fn given_blank_text_when_cleaning_then_returns_empty() {
    let cleaner = tokenizing_cleaner();

    assert_eq!(cleaner.clean_native_text(" \n "), "");
}
