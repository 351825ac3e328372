//! Locale-independent case folding
//!
//! Pipeline (per char): lowercase → uppercase → lowercase
//!
//! A single `to_lowercase` is not enough for caseless comparison: `ß` and
//! `SS` stay distinct, and `str::to_lowercase` maps a word-final `Σ` to `ς`.
//! Round-tripping each char through both directions collapses those pairs
//! onto one representative, and working per char keeps the mapping free of
//! context rules.

/// Fold `text` for caseless comparison.
///
/// The result is only meant to be compared against other folded text; it is
/// not a display form.
///
/// # Example
///
/// ```
/// use campus_core::text::fold_case;
///
/// assert_eq!(fold_case("Straße"), fold_case("STRASSE"));
/// assert_eq!(fold_case("ALGO"), "algo");
/// ```
pub fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether `folded_needle` occurs in `haystack` once the haystack is folded.
///
/// The needle must already be folded with [`fold_case`].
#[inline]
pub fn folded_contains(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || fold_case(haystack).contains(folded_needle)
}
