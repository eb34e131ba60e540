//! All-pairs cosine similarity over movie tag vectors.
//!
//! The matrix is computed once per snapshot and is immutable afterwards.
//! The build is O(n²·|vocabulary|), so rows are computed in parallel with
//! rayon; queries afterwards are plain row lookups.

use rayon::prelude::*;
use tracing::debug;

/// Square, symmetric matrix of pairwise cosine similarities.
///
/// Values are in [0, 1]. Row/column `i` corresponds to the movie at
/// catalog index `i`.
///
/// ## Zero-vector policy
/// If either vector is all zeros (a movie with no tags), the similarity is
/// defined as 0.0 rather than the undefined 0/0 — including on the
/// diagonal. Untagged movies therefore never rank above genuinely similar
/// ones. For every movie with at least one tag, `get(i, i) == 1.0`.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    /// Row-major n×n storage
    values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute the full pairwise similarity matrix.
    ///
    /// # Arguments
    /// * `vectors` - one count vector per movie, all of equal dimension
    pub fn compute(vectors: &[Vec<f32>]) -> Self {
        let n = vectors.len();
        let norms: Vec<f32> = vectors
            .iter()
            .map(|v| v.iter().map(|x| x * x).sum::<f32>().sqrt())
            .collect();

        let rows: Vec<Vec<f32>> = (0..n)
            .into_par_iter()
            .map(|i| {
                (0..n)
                    .map(|j| similarity_cell(&vectors[i], &vectors[j], norms[i], norms[j], i == j))
                    .collect()
            })
            .collect();

        debug!("computed {n}x{n} similarity matrix");
        Self {
            n,
            values: rows.into_iter().flatten().collect(),
        }
    }

    /// Similarity between movies `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.values[i * self.n + j]
    }

    /// Full similarity row for movie `i`: one score per catalog entry
    pub fn row(&self, i: usize) -> &[f32] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// Number of movies the matrix covers
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

/// One cell of the matrix. Diagonal cells of tagged movies are pinned to
/// exactly 1.0 so float error in the dot product can never leak into the
/// self-similarity invariant.
fn similarity_cell(u: &[f32], v: &[f32], norm_u: f32, norm_v: f32, diagonal: bool) -> f32 {
    if norm_u == 0.0 || norm_v == 0.0 {
        return 0.0;
    }
    if diagonal {
        return 1.0;
    }
    let dot: f32 = u.iter().zip(v).map(|(a, b)| a * b).sum();
    (dot / (norm_u * norm_v)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(vectors: &[&[f32]]) -> SimilarityMatrix {
        let owned: Vec<Vec<f32>> = vectors.iter().map(|v| v.to_vec()).collect();
        SimilarityMatrix::compute(&owned)
    }

    #[test]
    fn test_self_similarity_is_one() {
        let m = matrix(&[&[1.0, 1.0], &[2.0, 0.0]]);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 1), 1.0);
    }

    #[test]
    fn test_symmetry() {
        let m = matrix(&[&[1.0, 1.0, 0.0], &[0.0, 1.0, 1.0], &[1.0, 0.0, 1.0]]);
        for i in 0..m.len() {
            for j in 0..m.len() {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
    }

    #[test]
    fn test_known_cosine_value() {
        // ("Action Comedy") vs ("Action"): 1 / sqrt(2)
        let m = matrix(&[&[1.0, 1.0], &[1.0, 0.0]]);
        assert!((m.get(0, 1) - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_scores_zero_everywhere() {
        let m = matrix(&[&[1.0, 0.0], &[0.0, 0.0]]);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(1, 0), 0.0);
        // Even against itself: 0/0 is defined away, not propagated
        assert_eq!(m.get(1, 1), 0.0);
    }

    #[test]
    fn test_values_stay_in_unit_range() {
        let m = matrix(&[&[3.0, 4.0, 5.0], &[3.0, 4.0, 5.0], &[0.1, 0.2, 0.3]]);
        for i in 0..m.len() {
            for j in 0..m.len() {
                let s = m.get(i, j);
                assert!((0.0..=1.0).contains(&s), "sim({i},{j}) = {s}");
            }
        }
    }

    #[test]
    fn test_row_matches_cells() {
        let m = matrix(&[&[1.0, 0.0], &[1.0, 1.0]]);
        let row = m.row(1);
        assert_eq!(row.len(), 2);
        assert_eq!(row[0], m.get(1, 0));
        assert_eq!(row[1], m.get(1, 1));
    }
}
