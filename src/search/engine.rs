//! Search engine
//!
//! Ties together normalization, similarity scoring, and thresholded ranking
//! to answer free-text queries over an in-memory collection.

use std::cmp::Ordering;

use tracing::debug;

use super::normalize::normalize_with_case;
use super::scoring::{composite_score, FieldWeights, ScoreThresholds};

/// An item the engine can rank. Anything beyond the two accessors is opaque
/// payload, carried through unchanged.
pub trait Searchable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
}

/// Per-call search configuration
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Skip lowercasing during normalization
    pub case_sensitive: bool,
    /// Use the lenient threshold (0.3) instead of the strict one (0.7)
    pub fuzzy_match: bool,
    /// Queries shorter than this pass the collection through unfiltered
    pub min_chars: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            fuzzy_match: true,
            min_chars: 1,
        }
    }
}

/// Ranked outcome of one search call
#[derive(Debug, Clone)]
pub struct SearchResults<T> {
    /// Matching items, best first; a subset of the input, never mutated
    pub items: Vec<T>,
    /// The original, un-normalized query
    pub query: String,
    /// Number of items retained
    pub result_count: usize,
}

/// Search engine with configurable weights and thresholds
pub struct SearchEngine {
    weights: FieldWeights,
    thresholds: ScoreThresholds,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// Create a new engine with default weights and thresholds
    pub fn new() -> Self {
        Self {
            weights: FieldWeights::default(),
            thresholds: ScoreThresholds::default(),
        }
    }

    /// Create an engine with custom field weights
    pub fn with_weights(weights: FieldWeights) -> Self {
        Self {
            weights,
            thresholds: ScoreThresholds::default(),
        }
    }

    /// Rank `items` against `query`.
    ///
    /// Trivial queries (whitespace-only, or shorter than `min_chars`) skip
    /// scoring entirely and return the whole collection in input order.
    /// Otherwise every item is scored, items at or below the active
    /// threshold are dropped, and the rest are sorted by descending score.
    /// The sort is stable, so equal scores keep their input order.
    ///
    /// Total over its inputs: never panics, performs no I/O, holds no state
    /// across calls.
    pub fn search<T>(&self, items: &[T], query: &str, options: &SearchOptions) -> SearchResults<T>
    where
        T: Searchable + Clone,
    {
        if query.trim().is_empty() || query.chars().count() < options.min_chars {
            return SearchResults {
                items: items.to_vec(),
                query: query.to_string(),
                result_count: items.len(),
            };
        }

        let norm_query = normalize_with_case(query, options.case_sensitive);
        let threshold = if options.fuzzy_match {
            self.thresholds.fuzzy
        } else {
            self.thresholds.strict
        };

        let mut scored: Vec<(T, f64)> = items
            .iter()
            .filter_map(|item| {
                let norm_title = normalize_with_case(item.title(), options.case_sensitive);
                let norm_author = normalize_with_case(item.author(), options.case_sensitive);
                let score =
                    composite_score(&norm_title, &norm_author, &norm_query, &self.weights);

                (score > threshold).then(|| (item.clone(), score))
            })
            .collect();

        // sort_by is stable; descending by score
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        debug!(
            query = %query,
            candidates = items.len(),
            matches = scored.len(),
            threshold,
            "search complete"
        );

        let ranked: Vec<T> = scored.into_iter().map(|(item, _)| item).collect();
        let result_count = ranked.len();

        SearchResults {
            items: ranked,
            query: query.to_string(),
            result_count,
        }
    }
}
