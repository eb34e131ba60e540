//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern. It narrows the
//! browsing subset only; the recommendation engine always ranks over the
//! full catalog regardless of what is filtered here.

use crate::criteria::BrowseCriteria;
use crate::filters::{GenreFilter, RuntimeRangeFilter, StreamingServiceFilter, TitleSearchFilter};
use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new("Action"))
///     .add_filter(RuntimeRangeFilter::new(90, 150));
///
/// let browsing_subset = pipeline.apply(catalog.movies().to_vec())?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build a pipeline from a [`BrowseCriteria`] configuration.
    ///
    /// Absent criteria add no filter at all, so an empty configuration
    /// yields a pipeline that passes the whole corpus through.
    pub fn from_criteria(criteria: &BrowseCriteria) -> Self {
        let mut pipeline = Self::new();
        if let Some(query) = &criteria.text_search {
            pipeline = pipeline.add_filter(TitleSearchFilter::new(query.clone()));
        }
        if let Some(genre) = &criteria.genre {
            pipeline = pipeline.add_filter(GenreFilter::new(genre.clone()));
        }
        if let Some((min, max)) = criteria.runtime_range {
            pipeline = pipeline.add_filter(RuntimeRangeFilter::new(min, max));
        }
        if !criteria.services.is_empty() {
            pipeline = pipeline.add_filter(StreamingServiceFilter::new(criteria.services.clone()));
        }
        pipeline
    }

    /// Apply all filters in sequence to the movies.
    ///
    /// Filters are AND-composed: each stage sees only what the previous
    /// stage let through, so adding a filter can never grow the result.
    /// Input order is preserved throughout.
    pub fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        let mut current = movies;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
