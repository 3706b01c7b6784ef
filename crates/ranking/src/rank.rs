//! Final ordering of search result candidates.

use crate::error::{RankingError, Result};
use crate::matching::{analyze, MatchInfo, PreparedQuery};
use crate::scoring::score;
use serde::Serialize;
use std::cmp::Ordering;
use std::cmp::Reverse;
use yaadmart_catalog::{PersonalizationContext, SearchResultCandidate, SortMode};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-candidate sort key: relevance score plus the tie-break facts.
#[derive(Debug, Clone, Copy)]
struct RankKey {
    score: f64,
    in_stock: bool,
    title_starts_with: bool,
    title_len: usize,
}

impl RankKey {
    fn new(candidate: &SearchResultCandidate, info: &MatchInfo) -> Self {
        Self {
            score: score(info),
            in_stock: candidate.in_stock,
            // An exact title trivially starts with the query
            title_starts_with: info.exact_title || info.title_starts_with,
            title_len: info.title_len,
        }
    }
}

/// Score descending, then the tie-break chain: in-stock first, prefix
/// matches first, shorter normalized title first. Used with a stable sort,
/// so full ties keep their original relative order.
fn compare(a: &RankKey, b: &RankKey) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.in_stock.cmp(&a.in_stock))
        .then_with(|| b.title_starts_with.cmp(&a.title_starts_with))
        .then_with(|| a.title_len.cmp(&b.title_len))
}

/// Orders candidates for display.
///
/// Always returns a permutation of the input: no candidate is added,
/// removed, or mutated. Empty input, an empty/whitespace query, and missing
/// optional fields are all valid; the only error is a reserved sort mode.
///
/// - [`SortMode::Relevance`]: weighted match scoring with a deterministic
///   tie-break chain (in stock, prefix match, shorter title, original order).
/// - [`SortMode::PriceAsc`] / [`SortMode::PriceDesc`]: purely by
///   `price_jmd_cents`; relevance is not consulted.
/// - Reserved modes: [`RankingError::UnsupportedSortMode`].
pub fn rank(
    candidates: Vec<SearchResultCandidate>,
    query: &str,
    personalization: Option<&PersonalizationContext>,
    sort: SortMode,
) -> Result<Vec<SearchResultCandidate>> {
    match sort {
        SortMode::Relevance => Ok(rank_by_relevance(candidates, query, personalization)),
        SortMode::PriceAsc => {
            let mut out = candidates;
            out.sort_by_key(|c| c.price_jmd_cents);
            Ok(out)
        }
        SortMode::PriceDesc => {
            let mut out = candidates;
            out.sort_by_key(|c| Reverse(c.price_jmd_cents));
            Ok(out)
        }
        reserved => Err(RankingError::UnsupportedSortMode(reserved)),
    }
}

fn rank_by_relevance(
    candidates: Vec<SearchResultCandidate>,
    query: &str,
    personalization: Option<&PersonalizationContext>,
) -> Vec<SearchResultCandidate> {
    if candidates.len() < 2 {
        return candidates;
    }
    let prepared = PreparedQuery::new(query);

    // Order-preserving map: keys line up with their candidates before the
    // single stable sort below.
    #[cfg(feature = "parallel")]
    let keys: Vec<RankKey> = candidates
        .par_iter()
        .map(|c| RankKey::new(c, &analyze(c, &prepared, personalization)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let keys: Vec<RankKey> = candidates
        .iter()
        .map(|c| RankKey::new(c, &analyze(c, &prepared, personalization)))
        .collect();

    let mut keyed: Vec<(RankKey, SearchResultCandidate)> =
        keys.into_iter().zip(candidates).collect();
    keyed.sort_by(|a, b| compare(&a.0, &b.0));
    keyed.into_iter().map(|(_, c)| c).collect()
}

/// One candidate's full scoring breakdown, in final rank order.
#[derive(Debug, Clone, Serialize)]
pub struct RankedExplanation {
    /// Product identifier
    pub product_id: String,
    /// Store the availability belongs to
    pub store_id: String,
    /// Display title
    pub title: String,
    /// Final relevance score
    pub score: f64,
    /// The match facts behind the score
    pub match_info: MatchInfo,
}

/// Computes the per-candidate match facts and scores, ordered the same way
/// [`rank`] would order them under [`SortMode::Relevance`].
pub fn explain(
    candidates: &[SearchResultCandidate],
    query: &str,
    personalization: Option<&PersonalizationContext>,
) -> Vec<RankedExplanation> {
    let prepared = PreparedQuery::new(query);
    let mut explained: Vec<(RankKey, RankedExplanation)> = candidates
        .iter()
        .map(|c| {
            let info = analyze(c, &prepared, personalization);
            let key = RankKey::new(c, &info);
            let explanation = RankedExplanation {
                product_id: c.product.id.clone(),
                store_id: c.store_id.clone(),
                title: c.product.title.clone(),
                score: key.score,
                match_info: info,
            };
            (key, explanation)
        })
        .collect();
    explained.sort_by(|a, b| compare(&a.0, &b.0));
    explained.into_iter().map(|(_, e)| e).collect()
}
