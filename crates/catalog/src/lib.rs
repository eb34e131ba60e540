//! # Catalog Crate
//!
//! This crate loads and holds the movie dataset.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog)
//! - **loader**: Parse the movies CSV into the catalog, applying defaults
//! - **error**: Error types for catalog loading
//!
//! The catalog is built once at startup and never mutated afterwards; every
//! downstream component (vectorizer, similarity matrix, filters) reads it
//! by reference and keys movies by their catalog index.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load(Path::new("data/movies.csv"))?;
//! println!("{} movies, genres: {:?}", catalog.len(), catalog.genre_tokens());
//! ```

// Public modules
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, DEFAULT_RUNTIME_MINUTES, Movie};

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, genres: &str) -> Movie {
        Movie {
            title: title.to_string(),
            genres: genres.to_string(),
            rating: 7.0,
            runtime: 100,
            services: vec![],
            poster_url: String::new(),
            imdb_url: String::new(),
        }
    }

    #[test]
    fn test_genre_tokens_are_distinct_and_sorted() {
        let catalog = Catalog::from_movies(vec![
            movie("A", "Drama Action"),
            movie("B", "Action Comedy"),
        ]);

        assert_eq!(catalog.genre_tokens(), vec!["Action", "Comedy", "Drama"]);
    }

    #[test]
    fn test_runtime_bounds() {
        let mut short = movie("A", "Action");
        short.runtime = 85;
        let mut long = movie("B", "Drama");
        long.runtime = 200;

        let catalog = Catalog::from_movies(vec![short, long]);
        assert_eq!(catalog.runtime_bounds(), (85, 200));
    }

    #[test]
    fn test_has_service_is_exact_match() {
        let mut m = movie("A", "Action");
        m.services = vec!["Netflix".to_string(), "Hulu".to_string()];

        assert!(m.has_service("Hulu"));
        assert!(!m.has_service("hulu"));
        assert!(!m.has_service("Net"));
    }
}
