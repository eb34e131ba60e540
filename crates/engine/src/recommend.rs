//! Top-N nearest-neighbor lookup over the similarity matrix.

use crate::snapshot::EngineSnapshot;
use catalog::Movie;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// Stateless query service over an immutable [`EngineSnapshot`].
///
/// Cheap to clone and safe to share across threads; all it holds is an
/// `Arc` to the snapshot.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    snapshot: Arc<EngineSnapshot>,
}

impl RecommendationService {
    pub fn new(snapshot: Arc<EngineSnapshot>) -> Self {
        Self { snapshot }
    }

    /// Return up to `n` movies most similar to the one named `title`.
    ///
    /// ## Algorithm
    /// 1. Resolve the title to a catalog index (first match wins on
    ///    duplicate titles).
    /// 2. Read that row of the similarity matrix.
    /// 3. Stable-sort every other index by score descending, so equal
    ///    scores keep their catalog order and output is deterministic.
    /// 4. Drop the seed itself and truncate to `n`.
    ///
    /// An unknown title is not an error: it returns an empty vector and
    /// the caller shows a "no results" state. Scores are internal; only
    /// the ordering is observable in the result.
    pub fn recommend(&self, title: &str, n: usize) -> Vec<Movie> {
        let catalog = self.snapshot.catalog();
        let Some(seed) = catalog.position_of_title(title) else {
            debug!("no catalog entry titled '{title}'");
            return Vec::new();
        };

        let scores = self.snapshot.similarity().row(seed);
        let mut ranked: Vec<usize> = (0..catalog.len()).filter(|&i| i != seed).collect();
        ranked.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(n);

        debug!(
            "ranked {} movies for seed '{}' (index {seed}), returning {}",
            scores.len() - 1,
            title,
            ranked.len()
        );
        ranked
            .into_iter()
            .filter_map(|i| catalog.get(i))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    fn movie(title: &str, genres: &str) -> Movie {
        Movie {
            title: title.to_string(),
            genres: genres.to_string(),
            rating: 0.0,
            runtime: 120,
            services: vec![],
            poster_url: String::new(),
            imdb_url: String::new(),
        }
    }

    fn service(movies: Vec<Movie>) -> RecommendationService {
        let snapshot = EngineSnapshot::build(Catalog::from_movies(movies)).unwrap();
        RecommendationService::new(Arc::new(snapshot))
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_unknown_title_returns_empty() {
        let svc = service(vec![movie("A", "Action")]);
        assert!(svc.recommend("nonexistent-title", 5).is_empty());
    }

    #[test]
    fn test_seed_is_never_in_output() {
        let svc = service(vec![
            movie("A", "Action"),
            movie("B", "Action"),
            movie("C", "Action"),
        ]);

        let recs = svc.recommend("B", 10);
        assert_eq!(recs.len(), 2);
        assert!(!titles(&recs).contains(&"B"));
    }

    #[test]
    fn test_result_length_is_min_of_n_and_rest() {
        let svc = service(vec![
            movie("A", "Action"),
            movie("B", "Drama"),
            movie("C", "Comedy"),
            movie("D", "Horror"),
        ]);

        assert_eq!(svc.recommend("A", 2).len(), 2);
        assert_eq!(svc.recommend("A", 10).len(), 3);
        assert_eq!(svc.recommend("A", 0).len(), 0);
    }

    #[test]
    fn test_identical_vector_ranks_first_then_stable_ties() {
        // D shares A's exact vector (score 1); B and C both score
        // 1/sqrt(2) and must keep catalog order between them.
        let svc = service(vec![
            movie("A", "Action Comedy"),
            movie("B", "Action"),
            movie("C", "Comedy"),
            movie("D", "Action Comedy"),
        ]);

        let recs = svc.recommend("A", 3);
        assert_eq!(titles(&recs), vec!["D", "B", "C"]);
    }

    #[test]
    fn test_duplicate_title_resolves_to_first_row() {
        // Two movies titled "Dup" with different genres; the seed must be
        // the first one (Action), so the Action-tagged movie ranks first.
        let svc = service(vec![
            movie("Dup", "Action"),
            movie("Romance Pick", "Romance"),
            movie("Dup", "Romance"),
            movie("Action Pick", "Action"),
        ]);

        let recs = svc.recommend("Dup", 1);
        assert_eq!(titles(&recs), vec!["Action Pick"]);
    }

    #[test]
    fn test_untagged_movies_rank_last() {
        let svc = service(vec![
            movie("A", "Action"),
            movie("NoTags", ""),
            movie("B", "Action Drama"),
        ]);

        let recs = svc.recommend("A", 3);
        assert_eq!(titles(&recs), vec!["B", "NoTags"]);
    }

    #[test]
    fn test_results_carry_full_attributes() {
        let mut b = movie("B", "Action");
        b.rating = 8.2;
        b.runtime = 142;
        b.poster_url = "poster.jpg".to_string();

        let svc = service(vec![movie("A", "Action"), b]);
        let recs = svc.recommend("A", 1);

        assert_eq!(recs[0].rating, 8.2);
        assert_eq!(recs[0].runtime, 142);
        assert_eq!(recs[0].poster_url, "poster.jpg");
    }
}
