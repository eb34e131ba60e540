//! Core traits for the browsing filter pipeline.

use anyhow::Result;
use catalog::Movie;

/// Core trait for attribute filters over the movie catalog.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<Movie> and return a filtered Vec,
///   avoiding unnecessary cloning
/// - Filters must be stable: the output preserves the input's relative
///   order (no re-sorting), so the browsing subset keeps catalog order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// # Returns
    /// * `Ok(Vec<Movie>)` - the movies passing this filter, order preserved
    /// * `Err` - if filtering fails
    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>>;
}
