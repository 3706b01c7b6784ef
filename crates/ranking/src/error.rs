//! Error types for the ranking crate.

use thiserror::Error;
use yaadmart_catalog::SortMode;

/// Result type alias for ranking operations.
pub type Result<T> = std::result::Result<T, RankingError>;

/// Errors that can occur during ranking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// The requested sort mode is reserved and not implemented by this engine
    #[error("unsupported sort mode: {0} (supported: relevance, price_asc, price_desc)")]
    UnsupportedSortMode(SortMode),
}
