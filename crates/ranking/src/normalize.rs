//! Text normalization for query/title comparison.
//!
//! Grocery titles carry packaging noise ("340g", "x2", "12 pack") that must
//! not affect matching: "Milk 2L" and "Milk" describe the same product for
//! ranking purposes. `normalize` cancels that noise so comparable strings
//! compare equal.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Whole token that is an optional numeral fused to a weight/volume unit,
/// e.g. "340g", "2l", "500ml", "1.5kg", or a bare "ml".
static UNIT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d+(?:\.\d+)?)?(?:kg|mg|g|ml|cl|dl|l|floz|oz|lbs|lb|gal|qt|pt)(?:\d+(?:\.\d+)?)?$")
        .expect("unit token pattern is valid")
});

/// Fused multiplier token: "x2" or "3x".
static MULTIPLIER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:x\d+|\d+x)$").expect("multiplier token pattern is valid"));

/// Plain numeral, used to recognize the split "x 4" multiplier form.
static NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:\.\d+)?$").expect("numeral pattern is valid"));

/// Packaging nouns that never distinguish products.
static PACK_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "pack", "packs", "pk", "pcs", "pc", "piece", "pieces", "count", "ct", "bundle",
        "carton", "ctn",
    ]
    .into_iter()
    .collect()
});

/// Canonicalizes free text for comparison.
///
/// Lower-cases, strips diacritics (NFD decomposition, combining marks
/// removed), deletes unit/multiplier/pack-noise tokens, and collapses
/// whitespace. Idempotent: `normalize(normalize(s)) == normalize(s)`.
///
/// # Example
/// ```
/// use yaadmart_ranking::normalize;
///
/// assert_eq!(normalize("Grace Corned Beef 340g x2"), "grace corned beef");
/// assert_eq!(normalize("Milk 2L"), normalize("Milk"));
/// ```
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    // Removing a noise token can bring an "x" next to a numeral and form a
    // fresh split multiplier ("soda x pack 4" -> "soda x 4"), so the pass
    // repeats until the token list is stable. Each pass only removes
    // tokens, so this terminates.
    let mut tokens: Vec<&str> = folded.split_whitespace().collect();
    loop {
        let kept = strip_noise_tokens(&tokens);
        let changed = kept.len() != tokens.len();
        tokens = kept;
        if !changed {
            break;
        }
    }

    tokens.join(" ")
}

/// One removal pass over the token list.
fn strip_noise_tokens<'a>(tokens: &[&'a str]) -> Vec<&'a str> {
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];

        // Split multiplier form "x 4": drop the "x" and its numeral together.
        if token == "x" && tokens.get(i + 1).is_some_and(|next| NUMERAL.is_match(next)) {
            i += 2;
            continue;
        }
        if MULTIPLIER_TOKEN.is_match(token)
            || UNIT_TOKEN.is_match(token)
            || PACK_WORDS.contains(token)
        {
            i += 1;
            continue;
        }

        kept.push(token);
        i += 1;
    }
    kept
}
