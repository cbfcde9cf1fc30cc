/// Splits one sentence into word and punctuation tokens, dropping whitespace.
pub trait WordTokenizer: Send + Sync {
    fn tokenize(&self, sentence: &str) -> Vec<String>;
}
