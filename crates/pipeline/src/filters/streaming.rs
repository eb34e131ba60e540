//! Streaming-service availability filter.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Keeps movies available on at least one of the requested services.
///
/// OR semantics: a movie passes if it carries *any* requested service, not
/// all of them. Service names are compared exactly (no case folding, no
/// substring matching). With an empty request list nothing passes; callers
/// that mean "no constraint" simply don't add this filter.
pub struct StreamingServiceFilter {
    services: Vec<String>,
}

impl StreamingServiceFilter {
    pub fn new(services: Vec<String>) -> Self {
        Self { services }
    }
}

impl Filter for StreamingServiceFilter {
    fn name(&self) -> &str {
        "StreamingServiceFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        Ok(movies
            .into_iter()
            .filter(|m| self.services.iter().any(|s| m.has_service(s)))
            .collect())
    }
}
