//! Optional per-user ranking signals.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Caller-supplied personalization signals.
///
/// Absence of the whole context, or of either field, means the corresponding
/// signal is simply not applied; the engine never requires it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizationContext {
    /// Category ids the user shops often
    #[serde(default)]
    pub preferred_categories: HashSet<String>,
    /// Dietary tags the user filters for, e.g. "vegan"
    #[serde(default)]
    pub dietary_preferences: HashSet<String>,
}

impl PersonalizationContext {
    /// Returns true if the context carries any signal at all.
    #[inline]
    pub fn has_signals(&self) -> bool {
        !self.preferred_categories.is_empty() || !self.dietary_preferences.is_empty()
    }

    /// Returns true if the given category id is one of the user's
    /// preferred categories.
    #[inline]
    pub fn prefers_category(&self, category_id: &str) -> bool {
        self.preferred_categories.contains(category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_has_no_signals() {
        assert!(!PersonalizationContext::default().has_signals());
    }

    #[test]
    fn test_prefers_category() {
        let ctx = PersonalizationContext {
            preferred_categories: ["dairy".to_string()].into_iter().collect(),
            dietary_preferences: HashSet::new(),
        };
        assert!(ctx.has_signals());
        assert!(ctx.prefers_category("dairy"));
        assert!(!ctx.prefers_category("produce"));
    }
}
