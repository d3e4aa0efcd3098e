use crate::model::task::Task;

use super::tokenize::tokenize;

/// Terms shorter than this don't gate results — a one- or two-letter term
/// would prefix-match half the pack while the player is still typing
const MIN_TERM_LEN: usize = 3;

/// Extract the gating search terms from free query text.
///
/// Tokenizes, then keeps only "real" terms of three characters or more.
/// An empty result means the search matches everything.
pub fn query_terms(search_text: &str) -> Vec<String> {
    tokenize(search_text)
        .into_iter()
        .filter(|t| t.chars().count() >= MIN_TERM_LEN)
        .collect()
}

/// Whether a task's searchable text satisfies every query term.
///
/// The haystack is the tokenized name, description, and prerequisites.
/// Each term must prefix-match at least one haystack token; the first
/// unmatched term rejects the task (AND semantics, short-circuit).
pub fn matches(task: &Task, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }

    let mut haystack = tokenize(&task.name);
    if let Some(desc) = &task.description {
        haystack.extend(tokenize(desc));
    }
    if let Some(prereqs) = &task.prereqs {
        haystack.extend(tokenize(prereqs));
    }

    terms
        .iter()
        .all(|term| haystack.iter().any(|tok| tok.starts_with(term.as_str())))
}
