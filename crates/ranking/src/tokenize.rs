//! Tokenization built on top of [`normalize`](crate::normalize).

use crate::normalize;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Connective words that carry no matching signal.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "and", "the", "with", "a", "an", "of", "in", "for", "or", "to", "on", "at", "by",
    ]
    .into_iter()
    .collect()
});

/// Minimum token length kept after normalization.
const MIN_TOKEN_LEN: usize = 2;

/// Splits text into deduplicated, stopword-free tokens.
///
/// Tokens keep their first-occurrence order (not sorted); duplicates and
/// tokens shorter than two characters are dropped. Empty or whitespace-only
/// input yields an empty list.
///
/// # Example
/// ```
/// use yaadmart_ranking::tokenize;
///
/// assert_eq!(tokenize("apple and orange"), vec!["apple", "orange"]);
/// assert_eq!(tokenize("apple a orange apple"), vec!["apple", "orange"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut tokens = Vec::new();

    for word in normalized.split_whitespace() {
        if word.chars().count() < MIN_TOKEN_LEN || STOPWORDS.contains(word) {
            continue;
        }
        if seen.insert(word) {
            tokens.push(word.to_string());
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_stopwords() {
        assert_eq!(tokenize("apple and orange"), vec!["apple", "orange"]);
        assert_eq!(tokenize("rice with peas"), vec!["rice", "peas"]);
    }

    #[test]
    fn test_drops_short_tokens_and_dedups() {
        assert_eq!(tokenize("apple a orange apple"), vec!["apple", "orange"]);
    }

    #[test]
    fn test_preserves_first_occurrence_order() {
        assert_eq!(
            tokenize("zinc apple mango apple zinc"),
            vec!["zinc", "apple", "mango"]
        );
    }

    #[test]
    fn test_normalizes_before_splitting() {
        // Units and multipliers are gone before tokenization
        assert_eq!(tokenize("Tuna 170g x2"), vec!["tuna"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t ").is_empty());
        // Only stopwords / short tokens
        assert!(tokenize("a of to").is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let tokens = tokenize("ackee and saltfish ackee saltfish dinner");
        let unique: HashSet<&String> = tokens.iter().collect();
        assert_eq!(unique.len(), tokens.len());
    }
}
