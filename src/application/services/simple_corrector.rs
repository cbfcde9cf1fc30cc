use regex::Regex;
use std::sync::LazyLock;

/// Whole-text replacements applied in order. Earlier rules can consume text a
/// later rule would have matched (`tl1e` becomes `tle` before its own rule).
static SIMPLE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"rn", "m"),
        (r"cl", "d"),
        (r"vv", "w"),
        (r"(\w)1(\w)", "${1}l${2}"),
        (r"(\w)0(\w)", "${1}o${2}"),
        (r"\s+", " "),
        (r"\btlle\b", "the"),
        (r"\btl1e\b", "the"),
        (r"\s+([,.!?;:])", "${1}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Tokenizer-free correction mode. Produces output for any input.
pub fn simple_correct(text: &str) -> String {
    let corrected = SIMPLE_RULES
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        });
    corrected.trim().to_string()
}
