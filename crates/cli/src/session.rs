//! Session-owned favorites set.
//!
//! Favorites belong to the caller's session, not to the recommendation
//! engine: the engine never reads them. The CLI persists the set as a JSON
//! file between invocations, standing in for the in-memory session state a
//! long-running front end would hold.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// A set of favorite movie titles with toggle semantics.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Favorites {
    titles: BTreeSet<String>,
}

impl Favorites {
    /// Load favorites from disk; a missing file is an empty set, not an
    /// error (first run).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read favorites file {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("favorites file {} is not valid JSON", path.display()))
    }

    /// Persist the set back to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)
            .with_context(|| format!("failed to write favorites file {}", path.display()))
    }

    /// Add a title. Returns false if it was already a favorite.
    pub fn add(&mut self, title: &str) -> bool {
        self.titles.insert(title.to_string())
    }

    /// Remove a title. Returns false if it was not a favorite.
    pub fn remove(&mut self, title: &str) -> bool {
        self.titles.remove(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Favorite titles in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_report_changes() {
        let mut favorites = Favorites::default();

        assert!(favorites.add("Heat"));
        assert!(!favorites.add("Heat"));
        assert!(favorites.contains("Heat"));

        assert!(favorites.remove("Heat"));
        assert!(!favorites.remove("Heat"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut favorites = Favorites::default();
        favorites.add("Heat");
        favorites.add("Alien");

        let json = serde_json::to_string(&favorites).unwrap();
        let restored: Favorites = serde_json::from_str(&json).unwrap();

        let titles: Vec<&str> = restored.iter().collect();
        assert_eq!(titles, vec!["Alien", "Heat"]);
    }

    #[test]
    fn test_missing_file_loads_as_empty() {
        let favorites = Favorites::load(Path::new("does-not-exist.json")).unwrap();
        assert!(favorites.is_empty());
    }
}
