//! Typed search suggestions at the catalog boundary.

use serde::{Deserialize, Serialize};

/// A typeahead suggestion produced by the catalog lookup.
///
/// Closed tagged variant so the boundary payload is self-describing; the
/// `kind` tag distinguishes what the id refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// A concrete product
    Product {
        /// Product identifier
        id: String,
        /// Display text
        text: String,
    },
    /// A category to browse
    Category {
        /// Category identifier
        id: String,
        /// Display text
        text: String,
    },
    /// A store/location
    Store {
        /// Store identifier
        id: String,
        /// Display text
        text: String,
    },
}

impl Suggestion {
    /// The display text shown to the user.
    pub fn text(&self) -> &str {
        match self {
            Self::Product { text, .. } | Self::Category { text, .. } | Self::Store { text, .. } => {
                text
            }
        }
    }
}
