//! Declarative browse configuration.

use serde::{Deserialize, Serialize};

/// The caller-facing filter configuration for browsing the catalog.
///
/// Every field is optional; an absent field is a no-op (the whole corpus
/// passes that stage). All supplied criteria are combined with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseCriteria {
    /// Case-insensitive substring match against titles
    pub text_search: Option<String>,
    /// Substring match against the raw genres string
    pub genre: Option<String>,
    /// Inclusive `(min, max)` runtime bounds in minutes
    pub runtime_range: Option<(u32, u32)>,
    /// Requested streaming services, OR semantics; empty means no constraint
    #[serde(default)]
    pub services: Vec<String>,
}

impl BrowseCriteria {
    /// True if no criterion is set (browse returns the whole catalog)
    pub fn is_empty(&self) -> bool {
        self.text_search.is_none()
            && self.genre.is_none()
            && self.runtime_range.is_none()
            && self.services.is_empty()
    }
}
