//! Error types for the recommendation engine.

use thiserror::Error;

/// Errors that can occur while building the engine snapshot.
///
/// Query-time misses (an unknown title) are not errors; they yield empty
/// results. Only corpus-level structural defects fail the build.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Catalog has no movies to vectorize
    #[error("cannot build a similarity index over an empty catalog")]
    EmptyCatalog,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;
