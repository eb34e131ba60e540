//! Immutable engine snapshot and the handle that swaps it on reload.
//!
//! The snapshot bundles the catalog with everything derived from it
//! (vocabulary, similarity matrix). It is built once at startup, shared
//! read-only behind an `Arc`, and rebuilt wholesale on an explicit reload —
//! derived state is never mutated in place, so readers need no locking.

use crate::error::{EngineError, Result};
use crate::similarity::SimilarityMatrix;
use crate::vectorizer::TagVectorizer;
use catalog::Catalog;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tracing::info;

/// The catalog plus all state derived from it, built in one shot.
#[derive(Debug)]
pub struct EngineSnapshot {
    catalog: Catalog,
    vectorizer: TagVectorizer,
    similarity: SimilarityMatrix,
}

impl EngineSnapshot {
    /// Vectorize the catalog and compute the full similarity matrix.
    ///
    /// This is the one-time startup cost; every query afterwards is a
    /// matrix row lookup.
    ///
    /// # Returns
    /// * `Ok(EngineSnapshot)` - ready to serve recommendations
    /// * `Err(EngineError::EmptyCatalog)` - nothing to vectorize
    pub fn build(catalog: Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let start = Instant::now();
        let (vectorizer, vectors) = TagVectorizer::fit_transform(catalog.movies());
        let similarity = SimilarityMatrix::compute(&vectors);
        info!(
            "built similarity index: {} movies, {} genre tokens, {:?}",
            catalog.len(),
            vectorizer.vocabulary().len(),
            start.elapsed()
        );

        Ok(Self {
            catalog,
            vectorizer,
            similarity,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The corpus-wide genre vocabulary, sorted
    pub fn vocabulary(&self) -> &[String] {
        self.vectorizer.vocabulary()
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }
}

/// Shared handle to the current snapshot.
///
/// Readers take an `Arc` clone and keep using it for the duration of their
/// call; a concurrent reload swaps the inner `Arc`, so in-flight readers
/// see either the old or the new snapshot, never a partially built one.
#[derive(Debug)]
pub struct SnapshotHandle {
    inner: RwLock<Arc<EngineSnapshot>>,
}

impl SnapshotHandle {
    pub fn new(snapshot: EngineSnapshot) -> Self {
        Self {
            inner: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The current snapshot. Cheap: clones an `Arc`, not the data.
    pub fn current(&self) -> Arc<EngineSnapshot> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Replace the snapshot wholesale (full catalog reload).
    pub fn replace(&self, snapshot: EngineSnapshot) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(snapshot);
    }
}
