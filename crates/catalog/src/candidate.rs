//! Per-store availability candidates handed to the ranking engine.

use crate::{RankingCategory, RankingProduct};
use serde::{Deserialize, Serialize};

/// One product's availability at one store, as produced by the catalog
/// lookup collaborator.
///
/// A product may appear once per store that stocks it; the ranking engine
/// treats every occurrence independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultCandidate {
    /// The underlying catalog product
    pub product: RankingProduct,
    /// Brand resolved by the catalog lookup (may differ from the raw
    /// product record, e.g. after brand-table joins)
    pub brand: Option<String>,
    /// Resolved leaf category, when the lookup provided one
    pub category: Option<RankingCategory>,
    /// Whether the store currently has the item in stock
    pub in_stock: bool,
    /// Price in JMD minor units (cents)
    pub price_jmd_cents: i64,
    /// Store/location the availability belongs to
    pub store_id: String,
}

impl SearchResultCandidate {
    /// The brand string the engine should compare against: the resolved
    /// brand when present, falling back to the product record.
    #[inline]
    pub fn brand_text(&self) -> Option<&str> {
        self.brand
            .as_deref()
            .or(self.product.brand.as_deref())
    }

    /// The resolved category name, if any.
    #[inline]
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}
