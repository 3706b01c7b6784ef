//! Search relevance ranking for the YaadMart catalog.
//!
//! This crate provides:
//! - Text normalization that cancels packaging noise (units, multipliers)
//! - Stopword-free, order-preserving tokenization
//! - Per-candidate match analysis against a prepared query
//! - Tier-dominant weighted scoring with light personalization
//! - Deterministic ranking with a stable tie-break chain
//!
//! The whole pipeline is a pure, synchronous computation: no I/O, no shared
//! mutable state, safe to call from any number of threads. Fetching and
//! filtering the candidate set are caller responsibilities.
//!
//! # Example
//!
//! ```
//! use yaadmart_catalog::SortMode;
//! use yaadmart_ranking::rank;
//!
//! let ranked = rank(Vec::new(), "corned beef", None, SortMode::Relevance).unwrap();
//! assert!(ranked.is_empty());
//! ```

mod error;
mod matching;
mod normalize;
mod rank;
mod scoring;
mod tokenize;
pub mod weights;

pub use error::{RankingError, Result};
pub use matching::{analyze, MatchInfo, PreparedQuery};
pub use normalize::normalize;
pub use rank::{explain, rank, RankedExplanation};
pub use scoring::score;
pub use tokenize::tokenize;
