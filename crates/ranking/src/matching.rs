//! Match analysis: structured facts about one candidate vs. one query.

use crate::{normalize, tokenize};
use serde::Serialize;
use std::collections::HashSet;
use yaadmart_catalog::{PersonalizationContext, SearchResultCandidate};

/// A query prepared once per ranking call: normalized text plus its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    /// Normalized query text
    pub normalized: String,
    /// Deduplicated query tokens in first-occurrence order
    pub tokens: Vec<String>,
}

impl PreparedQuery {
    /// Normalizes and tokenizes a raw query string.
    pub fn new(raw: &str) -> Self {
        Self {
            normalized: normalize(raw),
            tokens: tokenize(raw),
        }
    }

    /// True when normalization left nothing to match against.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Match facts for one (candidate, query) pair.
///
/// Ephemeral: computed per call, never persisted. All facts are derived from
/// normalized forms. The three textual tiers per field are mutually
/// exclusive (`title_starts_with` implies not exact, `title_contains`
/// implies neither).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchInfo {
    /// Normalized title equals the normalized query
    pub exact_title: bool,
    /// Normalized title starts with the query (and is not exact)
    pub title_starts_with: bool,
    /// Normalized title contains the query (and neither of the above)
    pub title_contains: bool,
    /// Fraction of query tokens present as whole title tokens, in [0, 1]
    pub token_coverage: f64,
    /// Brand equals the query
    pub brand_exact: bool,
    /// Brand starts with the query (and is not exact)
    pub brand_starts_with: bool,
    /// Brand contains the query (and neither of the above)
    pub brand_contains: bool,
    /// Resolved category name equals the query
    pub category_exact: bool,
    /// Resolved category name contains the query (and is not exact)
    pub category_contains: bool,
    /// Fraction of requested dietary preferences the product's own tags
    /// satisfy, in [0, 1]; always 0 for a product with no tags
    pub dietary_overlap: f64,
    /// Candidate's leaf category is one of the user's preferred categories
    pub preference_match: bool,
    /// Character length of the normalized title (length bonus, tie-breaks)
    pub title_len: usize,
}

/// Exact / starts-with / contains, mutually exclusive.
fn three_tier(text: &str, query: &str) -> (bool, bool, bool) {
    if query.is_empty() || text.is_empty() {
        return (false, false, false);
    }
    if text == query {
        (true, false, false)
    } else if text.starts_with(query) {
        (false, true, false)
    } else if text.contains(query) {
        (false, false, true)
    } else {
        (false, false, false)
    }
}

/// Computes the match facts for one candidate against a prepared query.
///
/// An empty query produces all-false textual facts: every candidate ties and
/// the ranker's tie-break chain decides the order. Missing brand or category
/// simply leaves their facts false.
pub fn analyze(
    candidate: &SearchResultCandidate,
    query: &PreparedQuery,
    personalization: Option<&PersonalizationContext>,
) -> MatchInfo {
    let title = normalize(&candidate.product.title);
    let (exact_title, title_starts_with, title_contains) =
        three_tier(&title, &query.normalized);

    // Guard: coverage is defined as 0 for a token-less query.
    let token_coverage = if query.tokens.is_empty() {
        0.0
    } else {
        let title_tokens: HashSet<String> = tokenize(&title).into_iter().collect();
        let hits = query
            .tokens
            .iter()
            .filter(|t| title_tokens.contains(*t))
            .count();
        hits as f64 / query.tokens.len() as f64
    };

    let (brand_exact, brand_starts_with, brand_contains) = candidate
        .brand_text()
        .map(|b| three_tier(&normalize(b), &query.normalized))
        .unwrap_or((false, false, false));

    let (category_exact, category_contains) = candidate
        .category_name()
        .map(|name| {
            let name = normalize(name);
            let (exact, starts, contains) = three_tier(&name, &query.normalized);
            // Two-tier for categories: prefix hits count as containment.
            (exact, starts || contains)
        })
        .unwrap_or((false, false));

    let dietary_overlap = personalization
        .map(|ctx| dietary_overlap(candidate, ctx))
        .unwrap_or(0.0);

    let preference_match = personalization
        .is_some_and(|ctx| ctx.prefers_category(&candidate.product.category_leaf_id));

    MatchInfo {
        exact_title,
        title_starts_with,
        title_contains,
        token_coverage,
        brand_exact,
        brand_starts_with,
        brand_contains,
        category_exact,
        category_contains,
        dietary_overlap,
        preference_match,
        title_len: title.chars().count(),
    }
}

/// Fraction of the requested dietary preferences carried by the product's
/// own tags. A product with no tags yields 0 regardless of context.
fn dietary_overlap(candidate: &SearchResultCandidate, ctx: &PersonalizationContext) -> f64 {
    if ctx.dietary_preferences.is_empty() || !candidate.product.has_dietary_tags() {
        return 0.0;
    }
    let tags: HashSet<String> = candidate
        .product
        .dietary_tags
        .iter()
        .map(|t| normalize(t))
        .collect();
    let hits = ctx
        .dietary_preferences
        .iter()
        .filter(|p| tags.contains(&normalize(p)))
        .count();
    hits as f64 / ctx.dietary_preferences.len() as f64
}
