//! Text normalization for comparison
//!
//! Strings are lowercased, trimmed, and stripped of combining diacritical
//! marks before any scoring, so "José" and "jose" compare equal.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Normalize text for matching: lowercase, trim, NFD-decompose and drop
/// combining marks.
pub fn normalize(text: &str) -> String {
    normalize_with_case(text, false)
}

/// Normalization variant backing the `case_sensitive` option. Trimming and
/// diacritic stripping always apply; lowercasing is skipped when
/// `case_sensitive` is set.
pub fn normalize_with_case(text: &str, case_sensitive: bool) -> String {
    let trimmed = text.trim();
    let decomposed = trimmed.nfd().filter(|c| !COMBINING_MARKS.contains(c));

    if case_sensitive {
        decomposed.collect()
    } else {
        decomposed.flat_map(|c| c.to_lowercase()).collect()
    }
}
