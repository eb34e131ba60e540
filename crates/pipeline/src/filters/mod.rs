//! Filter implementations for the browsing pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre;
pub mod runtime;
pub mod streaming;
pub mod title_search;

// Re-export for convenience
pub use genre::GenreFilter;
pub use runtime::RuntimeRangeFilter;
pub use streaming::StreamingServiceFilter;
pub use title_search::TitleSearchFilter;

#[cfg(test)]
pub(crate) mod tests {
    use catalog::Movie;

    pub fn movie(title: &str, genres: &str) -> Movie {
        Movie {
            title: title.to_string(),
            genres: genres.to_string(),
            rating: 7.0,
            runtime: 120,
            services: vec![],
            poster_url: String::new(),
            imdb_url: String::new(),
        }
    }

    pub fn movie_with_runtime(title: &str, runtime: u32) -> Movie {
        let mut m = movie(title, "Drama");
        m.runtime = runtime;
        m
    }

    pub fn movie_on_services(title: &str, services: &[&str]) -> Movie {
        let mut m = movie(title, "Drama");
        m.services = services.iter().map(|s| s.to_string()).collect();
        m
    }
}
