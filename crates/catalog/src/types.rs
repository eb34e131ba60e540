//! Core domain types for the movie catalog.
//!
//! A [`Movie`] is an immutable record once loaded; the [`Catalog`] owns all
//! movies in their original dataset order. The position of a movie in the
//! catalog is its stable identity for the process lifetime and is used as
//! the row/column key into the similarity matrix downstream.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Runtime (in minutes) assigned when the dataset omits the value
pub const DEFAULT_RUNTIME_MINUTES: u32 = 120;

/// A single movie from the dataset.
///
/// `genres` is kept as the raw whitespace-separated token string rather than
/// a parsed list: the category filter uses substring containment against it,
/// and the vectorizer tokenizes it on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Lookup key. Not guaranteed unique; lookups resolve to the first match.
    pub title: String,
    /// Whitespace-separated genre tokens, e.g. "Action Sci-Fi Thriller"
    pub genres: String,
    /// Display rating; defaulted to 0.0 if absent or unparsable
    pub rating: f32,
    /// Runtime in minutes; defaulted via [`DEFAULT_RUNTIME_MINUTES`]
    pub runtime: u32,
    /// Streaming services carrying this movie; empty if unknown
    pub services: Vec<String>,
    /// Opaque display attribute, passed through unmodified
    pub poster_url: String,
    /// Opaque display attribute, passed through unmodified
    pub imdb_url: String,
}

impl Movie {
    /// Iterate over the individual genre tokens of this movie
    pub fn genre_tokens(&self) -> impl Iterator<Item = &str> {
        self.genres.split_whitespace()
    }

    /// True if this movie is available on the given service (exact match)
    pub fn has_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }
}

/// In-memory table of movies in dataset order.
///
/// Never mutated after load; a reload builds a fresh `Catalog` wholesale.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Wrap an already-built list of movies (used by the loader and tests)
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// All movies, in original dataset order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Get a movie by its catalog index
    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Resolve a title to its catalog index.
    ///
    /// Titles are not guaranteed unique; the first matching row wins.
    pub fn position_of_title(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.title == title)
    }

    /// All distinct genre tokens across the corpus, sorted
    pub fn genre_tokens(&self) -> Vec<String> {
        let tokens: BTreeSet<&str> = self
            .movies
            .iter()
            .flat_map(|m| m.genre_tokens())
            .collect();
        tokens.into_iter().map(String::from).collect()
    }

    /// All distinct streaming service names across the corpus, sorted
    pub fn service_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .movies
            .iter()
            .flat_map(|m| m.services.iter().map(String::as_str))
            .collect();
        names.into_iter().map(String::from).collect()
    }

    /// Minimum and maximum runtime across the corpus, in minutes.
    ///
    /// Returns `(0, 0)` for an empty catalog (the loader rejects those, but
    /// hand-built catalogs may be empty).
    pub fn runtime_bounds(&self) -> (u32, u32) {
        if self.movies.is_empty() {
            return (0, 0);
        }
        self.movies.iter().fold((u32::MAX, 0), |(min, max), m| {
            (min.min(m.runtime), max.max(m.runtime))
        })
    }
}
