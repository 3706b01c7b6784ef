//! Product and category records consumed by the ranking engine.

use serde::{Deserialize, Serialize};

/// A catalog product as the ranking engine sees it.
///
/// Immutable once constructed; the engine never mutates candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingProduct {
    /// Catalog product identifier
    pub id: String,
    /// Display title, e.g. "Grace Corned Beef 340g"
    pub title: String,
    /// Stock-keeping unit
    pub sku: String,
    /// Brand as stored on the product record, if any
    pub brand: Option<String>,
    /// Identifier of the product's leaf category
    pub category_leaf_id: String,
    /// Ancestor category chain, root first
    #[serde(default)]
    pub category_path_ids: Vec<String>,
    /// Dietary tags carried by the product itself, e.g. "vegan", "gluten-free"
    #[serde(default)]
    pub dietary_tags: Vec<String>,
}

impl RankingProduct {
    /// Returns true if the product carries at least one dietary tag.
    #[inline]
    pub fn has_dietary_tags(&self) -> bool {
        !self.dietary_tags.is_empty()
    }
}

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingCategory {
    /// Category identifier
    pub id: String,
    /// Display name, e.g. "Canned Meats"
    pub name: String,
}
