//! Pipeline for narrowing the browsing subset of the movie catalog.
//!
//! This crate provides:
//! - Filter trait and implementations for attribute filtering
//! - FilterPipeline for composing filters
//! - BrowseCriteria, the declarative caller-facing configuration
//!
//! ## Architecture
//! Filters operate on raw catalog attributes only (title, genres string,
//! runtime, streaming services) and are independent of the similarity
//! engine. The filtered subset feeds the caller's seed-movie selection; it
//! never restricts the universe the recommendation service ranks over.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{BrowseCriteria, FilterPipeline};
//!
//! let criteria = BrowseCriteria {
//!     genre: Some("Action".to_string()),
//!     runtime_range: Some((90, 150)),
//!     ..Default::default()
//! };
//!
//! let subset = FilterPipeline::from_criteria(&criteria)
//!     .apply(catalog.movies().to_vec())?;
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use criteria::BrowseCriteria;
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
