mod lexicon_pos_tagger;
mod unicode_sentence_tokenizer;
mod unicode_word_tokenizer;

pub use lexicon_pos_tagger::LexiconPosTagger;
pub use unicode_sentence_tokenizer::UnicodeSentenceTokenizer;
pub use unicode_word_tokenizer::UnicodeWordTokenizer;
