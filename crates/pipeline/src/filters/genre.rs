//! Genre filter over the raw tag string.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Keeps movies whose raw `genres` string contains the given token.
///
/// This is deliberately substring containment, not token equality: a value
/// that is a prefix of another token over-matches ("Sci" matches "Sci-Fi").
/// That looseness matches the source behavior this system replaces;
/// tightening it would change which movies a browse returns.
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        Ok(movies
            .into_iter()
            .filter(|m| m.genres.contains(&self.genre))
            .collect())
    }
}
