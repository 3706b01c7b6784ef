//! Catalog data model shared across YaadMart search tooling.
//!
//! This crate provides:
//! - Product and category records as the ranking engine sees them
//! - Per-store availability candidates with stock and JMD pricing
//! - Optional personalization context (preferred categories, dietary tags)
//! - Sort-mode and suggestion types for the search boundary
//!
//! All types are plain serde values; nothing here performs I/O or holds
//! mutable state. Validation of catalog records is an upstream concern.

mod candidate;
mod personalization;
mod product;
mod sort;
mod suggestion;

pub use candidate::SearchResultCandidate;
pub use personalization::PersonalizationContext;
pub use product::{RankingCategory, RankingProduct};
pub use sort::{ParseSortModeError, SortMode};
pub use suggestion::Suggestion;
