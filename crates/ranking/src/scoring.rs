//! Weighted relevance scoring over [`MatchInfo`] facts.

use crate::matching::MatchInfo;
use crate::weights;

/// Length bonus for exact/starts-with title hits: shorter titles are more
/// specific answers to the query. `min(cap, max(0, 50 - len) * factor)`.
fn length_bonus(title_len: usize, factor: f64, cap: f64) -> f64 {
    ((weights::LENGTH_BONUS_BASELINE - title_len as f64).max(0.0) * factor).min(cap)
}

/// Sums the weighted match facts into one finite, non-negative score.
///
/// The personalization-dependent facts (`preference_match`,
/// `dietary_overlap`) are already folded into the [`MatchInfo`] by the
/// analyzer, so scoring is a pure weight application; the tier spacing in
/// [`weights`] guarantees no combination of lower-tier signals and boosts
/// reaches a higher tier's range.
///
/// # Example
/// ```
/// use yaadmart_ranking::{score, MatchInfo};
///
/// let info = MatchInfo { exact_title: true, title_len: 12, ..Default::default() };
/// assert!(score(&info) >= 1000.0);
/// ```
pub fn score(info: &MatchInfo) -> f64 {
    let mut total = 0.0;

    if info.exact_title {
        total += weights::EXACT_TITLE
            + length_bonus(
                info.title_len,
                weights::EXACT_LENGTH_FACTOR,
                weights::EXACT_LENGTH_BONUS_CAP,
            );
    } else if info.title_starts_with {
        total += weights::TITLE_STARTS_WITH
            + length_bonus(
                info.title_len,
                weights::STARTS_WITH_LENGTH_FACTOR,
                weights::STARTS_WITH_LENGTH_BONUS_CAP,
            );
    } else if info.title_contains {
        total += weights::TITLE_CONTAINS;
    }

    total += info.token_coverage.clamp(0.0, 1.0) * weights::TOKEN_COVERAGE;

    if info.brand_exact {
        total += weights::BRAND_EXACT;
    } else if info.brand_starts_with {
        total += weights::BRAND_STARTS_WITH;
    } else if info.brand_contains {
        total += weights::BRAND_CONTAINS;
    }

    if info.category_exact {
        total += weights::CATEGORY_EXACT;
    } else if info.category_contains {
        total += weights::CATEGORY_CONTAINS;
    }

    if info.preference_match {
        total += weights::PREFERRED_CATEGORY_BOOST;
    }
    total += info.dietary_overlap.clamp(0.0, 1.0) * weights::DIETARY_BOOST;

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{analyze, PreparedQuery};
    use yaadmart_catalog::{PersonalizationContext, RankingProduct, SearchResultCandidate};

    fn candidate(title: &str) -> SearchResultCandidate {
        SearchResultCandidate {
            product: RankingProduct {
                id: format!("p-{title}"),
                title: title.into(),
                sku: "SKU".into(),
                brand: None,
                category_leaf_id: "misc".into(),
                category_path_ids: vec![],
                dietary_tags: vec![],
            },
            brand: None,
            category: None,
            in_stock: true,
            price_jmd_cents: 10_000,
            store_id: "s1".into(),
        }
    }

    fn score_for(title: &str, query: &str, ctx: Option<&PersonalizationContext>) -> f64 {
        let c = candidate(title);
        score(&analyze(&c, &PreparedQuery::new(query), ctx))
    }

    #[test]
    fn test_exact_beats_longer_variant() {
        // Query "iPhone 15": the exact title must outscore the Pro model
        let exact = score_for("iPhone 15", "iPhone 15", None);
        let longer = score_for("iPhone 15 Pro", "iPhone 15", None);
        assert!(exact > longer, "exact {exact} vs starts-with {longer}");
    }

    #[test]
    fn test_prefix_beats_interior_mention() {
        // Query "grace": the brand-led title must outscore the interior hit
        let prefix = score_for("Grace Corned Beef", "grace", None);
        let interior = score_for("Jamaican Grace-style Sauce", "grace", None);
        assert!(prefix > interior, "prefix {prefix} vs interior {interior}");
    }

    #[test]
    fn test_length_bonus_capped() {
        let exact = |title_len| MatchInfo {
            exact_title: true,
            title_len,
            ..Default::default()
        };
        // Bonus saturates at the cap for the shortest titles
        assert_eq!(score(&exact(0)), weights::EXACT_TITLE + weights::EXACT_LENGTH_BONUS_CAP);
        // Mid-length titles earn a partial bonus
        let mid = score(&exact(30));
        assert!(mid > weights::EXACT_TITLE);
        assert!(mid < weights::EXACT_TITLE + weights::EXACT_LENGTH_BONUS_CAP);
        // Titles at or past the baseline earn nothing
        assert_eq!(score(&exact(50)), weights::EXACT_TITLE);
        assert_eq!(score(&exact(120)), weights::EXACT_TITLE);

        let starts = MatchInfo {
            title_starts_with: true,
            title_len: 0,
            ..Default::default()
        };
        assert_eq!(
            score(&starts),
            weights::TITLE_STARTS_WITH + weights::STARTS_WITH_LENGTH_BONUS_CAP
        );
    }

    #[test]
    fn test_shorter_exact_title_scores_higher() {
        let short = score_for("Milk", "milk", None);
        let longer = score_for("Milk Chocolate Bar Milk", "milk chocolate bar milk", None);
        assert!(short > longer);
    }

    #[test]
    fn test_preference_boost_never_beats_exact_text_match() {
        let ctx = PersonalizationContext {
            preferred_categories: ["misc".to_string()].into_iter().collect(),
            dietary_preferences: ["vegan".to_string()].into_iter().collect(),
        };

        // Weak match on a preferred candidate with full dietary overlap
        let mut weak = candidate("Grace Corned Beef");
        weak.product.dietary_tags = vec!["vegan".into()];
        let weak_score = score(&analyze(&weak, &PreparedQuery::new("grace"), Some(&ctx)));

        // Strong match on an unpreferred candidate
        let strong_score = score_for("Grace", "grace", None);

        assert!(strong_score > weak_score);
    }

    #[test]
    fn test_dietary_boost_zero_without_product_tags() {
        let ctx = PersonalizationContext {
            preferred_categories: Default::default(),
            dietary_preferences: ["vegan".to_string()].into_iter().collect(),
        };
        let with_ctx = score_for("Oat Milk", "oat milk", Some(&ctx));
        let without_ctx = score_for("Oat Milk", "oat milk", None);
        assert_eq!(with_ctx, without_ctx);
    }

    #[test]
    fn test_scores_finite_and_non_negative() {
        for (title, query) in [
            ("", ""),
            ("Grace Corned Beef", ""),
            ("", "grace"),
            ("Grace Corned Beef 340g x2", "grace corned beef"),
        ] {
            let s = score_for(title, query, None);
            assert!(s.is_finite() && s >= 0.0, "{title:?}/{query:?} -> {s}");
        }
    }

    #[test]
    fn test_no_facts_scores_zero() {
        assert_eq!(score(&MatchInfo::default()), 0.0);
    }
}
