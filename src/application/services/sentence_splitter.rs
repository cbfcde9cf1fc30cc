use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Splits after `.`, `!` or `?` followed by whitespace. Terminal punctuation
/// stays on its sentence; blank pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // the punctuation is ASCII, so it occupies exactly one byte
        let end = boundary.start() + 1;
        push_trimmed(&text[start..end], &mut sentences);
        start = boundary.end();
    }
    push_trimmed(&text[start..], &mut sentences);

    sentences
}

fn push_trimmed(piece: &str, out: &mut Vec<String>) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}
