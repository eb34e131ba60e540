//! Case-insensitive substring search against movie titles.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Keeps movies whose title contains the query, ignoring case.
pub struct TitleSearchFilter {
    /// Query lowered once at construction
    query: String,
}

impl TitleSearchFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl Filter for TitleSearchFilter {
    fn name(&self) -> &str {
        "TitleSearchFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        Ok(movies
            .into_iter()
            .filter(|m| m.title.to_lowercase().contains(&self.query))
            .collect())
    }
}
