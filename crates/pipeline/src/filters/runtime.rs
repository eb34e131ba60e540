//! Inclusive runtime-range filter.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Keeps movies whose runtime (minutes) lies in `[min, max]`, inclusive on
/// both ends.
pub struct RuntimeRangeFilter {
    min: u32,
    max: u32,
}

impl RuntimeRangeFilter {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl Filter for RuntimeRangeFilter {
    fn name(&self) -> &str {
        "RuntimeRangeFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        Ok(movies
            .into_iter()
            .filter(|m| m.runtime >= self.min && m.runtime <= self.max)
            .collect())
    }
}
