//! Library entries and JSON loading
//!
//! The CLI's stand-in for the document store: a JSON array of manga entries
//! loaded into memory before any search runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::search::Searchable;

/// One manga in the library. Only `title` and `author` take part in search;
/// the rest is payload the engine carries through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MangaEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub chapter_count: u32,
}

impl Searchable for MangaEntry {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }
}

/// Load a library from a JSON file containing an array of entries.
pub fn load_library(path: &Path) -> Result<Vec<MangaEntry>, AppError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::LibraryLoad(format!("cannot read {}: {}", path.display(), e))
    })?;

    let entries: Vec<MangaEntry> = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), entries = entries.len(), "library loaded");

    Ok(entries)
}
