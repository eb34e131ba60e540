//! Fixed-vocabulary count vectorization of genre tags.
//!
//! The vocabulary is derived once from the whole corpus and is fixed for
//! the lifetime of the snapshot that owns it. Each movie's `genres` string
//! is tokenized on whitespace and mapped to a count vector over that
//! vocabulary.
//!
//! Tokenization is case-sensitive: tokens are used exactly as the catalog
//! stores them, so "Sci-Fi" and "sci-fi" are distinct dimensions. Counts
//! are raw occurrence counts with no normalization.

use catalog::Movie;
use std::collections::{BTreeSet, HashMap};

/// Derives and holds the corpus-wide genre vocabulary.
#[derive(Debug, Clone)]
pub struct TagVectorizer {
    /// Sorted vocabulary; the position of a token is its vector dimension
    vocabulary: Vec<String>,
    /// Reverse lookup from token to dimension
    token_index: HashMap<String, usize>,
}

impl TagVectorizer {
    /// Learn the vocabulary from every movie's genre tokens.
    ///
    /// The vocabulary is sorted lexicographically so the result is
    /// deterministic for a given catalog. Downstream similarity is
    /// invariant to the ordering; sorting just makes snapshots
    /// reproducible across runs.
    pub fn fit(movies: &[Movie]) -> Self {
        let tokens: BTreeSet<&str> = movies.iter().flat_map(|m| m.genre_tokens()).collect();
        let vocabulary: Vec<String> = tokens.into_iter().map(String::from).collect();
        let token_index = vocabulary
            .iter()
            .enumerate()
            .map(|(dim, token)| (token.clone(), dim))
            .collect();
        Self {
            vocabulary,
            token_index,
        }
    }

    /// The learned vocabulary, sorted
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Convert one movie's genre tags into a count vector.
    ///
    /// A movie with no tags maps to the zero vector; the similarity layer
    /// handles that case explicitly.
    pub fn transform(&self, movie: &Movie) -> Vec<f32> {
        let mut counts = vec![0.0; self.vocabulary.len()];
        for token in movie.genre_tokens() {
            if let Some(&dim) = self.token_index.get(token) {
                counts[dim] += 1.0;
            }
        }
        counts
    }

    /// Fit the vocabulary and transform every movie in one pass.
    ///
    /// # Returns
    /// The fitted vectorizer and one count vector per movie, in catalog
    /// order.
    pub fn fit_transform(movies: &[Movie]) -> (Self, Vec<Vec<f32>>) {
        let vectorizer = Self::fit(movies);
        let vectors = movies.iter().map(|m| vectorizer.transform(m)).collect();
        (vectorizer, vectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, genres: &str) -> Movie {
        Movie {
            title: title.to_string(),
            genres: genres.to_string(),
            rating: 0.0,
            runtime: 120,
            services: vec![],
            poster_url: String::new(),
            imdb_url: String::new(),
        }
    }

    #[test]
    fn test_vocabulary_is_sorted_and_distinct() {
        let movies = vec![movie("A", "Drama Action"), movie("B", "Action Comedy")];
        let vectorizer = TagVectorizer::fit(&movies);

        assert_eq!(vectorizer.vocabulary(), ["Action", "Comedy", "Drama"]);
    }

    #[test]
    fn test_transform_counts_occurrences() {
        let movies = vec![movie("A", "Action Action Drama")];
        let (vectorizer, vectors) = TagVectorizer::fit_transform(&movies);

        assert_eq!(vectorizer.vocabulary(), ["Action", "Drama"]);
        assert_eq!(vectors[0], vec![2.0, 1.0]);
    }

    #[test]
    fn test_untagged_movie_is_zero_vector() {
        let movies = vec![movie("A", "Action"), movie("B", "")];
        let (_, vectors) = TagVectorizer::fit_transform(&movies);

        assert!(vectors[1].iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_tokenization_is_case_sensitive() {
        let movies = vec![movie("A", "Action action")];
        let vectorizer = TagVectorizer::fit(&movies);

        assert_eq!(vectorizer.vocabulary(), ["Action", "action"]);
    }
}
