//! Fuzzy text search with weighted multi-field ranking
//!
//! Queries and candidate fields are normalized (lowercased, trimmed,
//! diacritics stripped), scored with a Levenshtein-based similarity ratio
//! weighted across title and author, filtered by a threshold, and returned
//! best match first.

pub mod distance;
pub mod engine;
pub mod normalize;
pub mod scoring;


pub use distance::levenshtein;
pub use engine::{SearchEngine, SearchOptions, SearchResults, Searchable};
pub use normalize::normalize;
pub use scoring::{similarity, FieldWeights, ScoreThresholds};
