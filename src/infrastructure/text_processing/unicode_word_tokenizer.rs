use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::WordTokenizer;

const HYPHENS: &[&str] = &["-", "\u{2010}"];

/// UAX #29 word boundaries. Punctuation comes back as its own token and
/// whitespace segments are dropped; hyphenated compounds (`well-known`,
/// `e-mail`) stay one token.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl WordTokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        let segments: Vec<&str> = sentence.split_word_bounds().collect();
        let mut tokens: Vec<String> = Vec::new();
        let mut index = 0;

        while index < segments.len() {
            let segment = segments[index];

            let joins_compound = HYPHENS.contains(&segment)
                && index > 0
                && is_word(segments[index - 1])
                && segments.get(index + 1).is_some_and(|next| is_word(next));
            if joins_compound {
                if let Some(last) = tokens.last_mut() {
                    last.push_str(segment);
                    last.push_str(segments[index + 1]);
                    index += 2;
                    continue;
                }
            }

            if !segment.trim().is_empty() {
                tokens.push(segment.to_string());
            }
            index += 1;
        }

        tokens
    }
}

fn is_word(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_alphanumeric)
}
