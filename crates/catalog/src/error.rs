//! Error types for the catalog crate.
//!
//! Only structural defects are errors here: a missing required column or an
//! empty dataset. Malformed values in optional columns are absorbed at load
//! time with per-row defaults and never surface as errors.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error while opening or reading the dataset
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV-level error (malformed record structure, bad UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the recommender cannot work without is absent
    #[error("required column '{column}' is missing from the dataset header")]
    MissingColumn { column: String },

    /// The dataset parsed fine but contains no rows
    #[error("dataset contains no movies; nothing to build an index from")]
    EmptyCatalog,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
