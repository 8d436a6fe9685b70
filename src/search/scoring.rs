//! Similarity scoring and field weighting
//!
//! Per-string similarity is an edit-distance ratio over normalized text;
//! per-item relevance combines weighted title and author similarity with a
//! flat bonus for exact substring containment.

use super::distance::levenshtein;
use super::normalize::normalize;

/// Scoring weights for the two searchable fields
#[derive(Debug, Clone)]
pub struct FieldWeights {
    /// Multiplier for the title similarity score
    pub title_weight: f64,
    /// Multiplier for the author similarity score
    pub author_weight: f64,
    /// Flat bonus when the normalized title contains the query
    pub title_exact_bonus: f64,
    /// Flat bonus when the normalized author contains the query
    pub author_exact_bonus: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title_weight: 0.6,       // Title match dominates
            author_weight: 0.4,
            title_exact_bonus: 0.3,
            author_exact_bonus: 0.2,
        }
    }
}

/// Score cutoffs for the two filtering modes
#[derive(Debug, Clone)]
pub struct ScoreThresholds {
    /// Minimum score (exclusive) in fuzzy mode
    pub fuzzy: f64,
    /// Minimum score (exclusive) in strict, near-exact mode
    pub strict: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            fuzzy: 0.3,
            strict: 0.7,
        }
    }
}

/// Similarity between two strings in `[0, 1]`.
///
/// Both inputs are normalized first; `similarity("José", "jose")` is `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_normalized(&normalize(a), &normalize(b))
}

/// Similarity over strings that have already been normalized.
///
/// Equal strings score 1.0. Strings shorter than 2 chars skip the edit
/// distance (it degenerates on 0-1 char inputs) and score 0.8 on substring
/// containment, 0 otherwise. Everything else scores
/// `(longer_len - edit_distance) / longer_len`.
pub fn similarity_normalized(s1: &str, s2: &str) -> f64 {
    if s1 == s2 {
        return 1.0;
    }
    // An empty field never matches a non-empty query; also keeps the
    // trivial empty-substring case out of the 0.8 branch.
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 < 2 || len2 < 2 {
        let (longer, shorter) = if len1 >= len2 { (s1, s2) } else { (s2, s1) };
        return if longer.contains(shorter) { 0.8 } else { 0.0 };
    }

    let longer_len = len1.max(len2);
    let distance = levenshtein(s1, s2);

    ((longer_len as f64 - distance as f64) / longer_len as f64).clamp(0.0, 1.0)
}

/// Composite relevance of an item against a query.
///
/// All three inputs must already be normalized with the same settings. The
/// two field scores are combined by taking the maximum, so a strong match on
/// either field alone qualifies the item.
pub fn composite_score(
    norm_title: &str,
    norm_author: &str,
    norm_query: &str,
    weights: &FieldWeights,
) -> f64 {
    let title_score = similarity_normalized(norm_title, norm_query);
    let author_score = similarity_normalized(norm_author, norm_query);

    let title_bonus = if !norm_query.is_empty() && norm_title.contains(norm_query) {
        weights.title_exact_bonus
    } else {
        0.0
    };
    let author_bonus = if !norm_query.is_empty() && norm_author.contains(norm_query) {
        weights.author_exact_bonus
    } else {
        0.0
    };

    let weighted_title = title_score * weights.title_weight + title_bonus;
    let weighted_author = author_score * weights.author_weight + author_bonus;

    weighted_title.max(weighted_author)
}
