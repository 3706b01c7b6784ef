//! Sort modes accepted by the ranking engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How search results should be ordered.
///
/// `Relevance`, `PriceAsc` and `PriceDesc` are implemented by the ranking
/// engine. The remaining variants are reserved for signals the backend does
/// not ship yet; the engine rejects them with an explicit error rather than
/// silently falling back to relevance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Weighted text/brand/category relevance (default)
    #[default]
    Relevance,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Reserved: best-rated first
    RatingDesc,
    /// Reserved: most-reviewed first
    ReviewCountDesc,
    /// Reserved: fastest delivery first
    DeliveryTimeAsc,
    /// Reserved: nearest store first
    DistanceAsc,
}

impl SortMode {
    /// Returns true for modes the ranking engine implements today.
    #[inline]
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Relevance | Self::PriceAsc | Self::PriceDesc)
    }

    /// Stable wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::RatingDesc => "rating_desc",
            Self::ReviewCountDesc => "review_count_desc",
            Self::DeliveryTimeAsc => "delivery_time_asc",
            Self::DistanceAsc => "distance_asc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort-mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort mode: {0}")]
pub struct ParseSortModeError(pub String);

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(Self::Relevance),
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "rating_desc" => Ok(Self::RatingDesc),
            "review_count_desc" => Ok(Self::ReviewCountDesc),
            "delivery_time_asc" => Ok(Self::DeliveryTimeAsc),
            "distance_asc" => Ok(Self::DistanceAsc),
            other => Err(ParseSortModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_relevance() {
        assert_eq!(SortMode::default(), SortMode::Relevance);
    }

    #[test]
    fn test_supported_modes() {
        assert!(SortMode::Relevance.is_supported());
        assert!(SortMode::PriceAsc.is_supported());
        assert!(SortMode::PriceDesc.is_supported());
        assert!(!SortMode::RatingDesc.is_supported());
        assert!(!SortMode::DistanceAsc.is_supported());
    }

    #[test]
    fn test_round_trip_names() {
        for mode in [
            SortMode::Relevance,
            SortMode::PriceAsc,
            SortMode::PriceDesc,
            SortMode::RatingDesc,
            SortMode::ReviewCountDesc,
            SortMode::DeliveryTimeAsc,
            SortMode::DistanceAsc,
        ] {
            assert_eq!(mode.as_str().parse::<SortMode>().unwrap(), mode);
        }
        assert!("newest".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_serde_names_match_wire_format() {
        let json = serde_json::to_string(&SortMode::PriceDesc).unwrap();
        assert_eq!(json, "\"price_desc\"");
        let mode: SortMode = serde_json::from_str("\"review_count_desc\"").unwrap();
        assert_eq!(mode, SortMode::ReviewCountDesc);
    }
}
