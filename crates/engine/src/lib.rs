//! # Engine Crate
//!
//! Genre-similarity recommendation engine. Given a seed movie, ranks every
//! other movie in the catalog by cosine similarity of genre-tag count
//! vectors and returns the top N.
//!
//! ## Components
//!
//! - **vectorizer**: fixed-vocabulary count vectors from genre tag strings
//! - **similarity**: all-pairs cosine similarity matrix, built once
//! - **snapshot**: immutable bundle of catalog + derived state, with a
//!   handle that swaps it atomically on reload
//! - **recommend**: top-N neighbor lookup with deterministic tie-breaking
//! - **error**: build-time error types
//!
//! ## Data flow
//!
//! Catalog → TagVectorizer → SimilarityMatrix → RecommendationService.
//! Browsing filters (the `pipeline` crate) run independently against the
//! catalog and never restrict what the service ranks over.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use engine::{EngineSnapshot, RecommendationService};
//! use std::sync::Arc;
//!
//! let catalog = Catalog::load(Path::new("data/movies.csv"))?;
//! let snapshot = Arc::new(EngineSnapshot::build(catalog)?);
//! let service = RecommendationService::new(snapshot);
//!
//! for movie in service.recommend("Inception", 6) {
//!     println!("{} [{}]", movie.title, movie.genres);
//! }
//! ```

// Public modules
pub mod error;
pub mod recommend;
pub mod similarity;
pub mod snapshot;
pub mod vectorizer;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use recommend::RecommendationService;
pub use similarity::SimilarityMatrix;
pub use snapshot::{EngineSnapshot, SnapshotHandle};
pub use vectorizer::TagVectorizer;
