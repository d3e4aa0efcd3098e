use std::sync::LazyLock;

use regex::Regex;

/// Words too common to carry any signal in a task search
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "into", "is", "it",
    "its", "of", "on", "or", "the", "to", "with",
];

/// Tokens shorter than this are dropped outright
const MIN_TOKEN_LEN: usize = 2;

static WORD_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\pL\pN]+").expect("word-break pattern is valid"));

/// Split free text into normalized search tokens.
///
/// Lowercases the text, splits on runs of non-alphanumeric characters, and
/// drops tokens shorter than two characters or in the stop-word set. No
/// stemming. Deterministic and side-effect-free.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    WORD_BREAK
        .split(&lower)
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .filter(|t| !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}
