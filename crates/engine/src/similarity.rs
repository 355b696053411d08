//! Pairwise cosine similarity matrix.
//!
//! Built once from the vectorized catalog and read-only afterwards, so it
//! can be shared across concurrent query threads without locking. Row and
//! column i always correspond to the i-th catalog movie.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Cosine similarity between two equal-length vectors.
///
/// Defined as 0.0 when either vector is all-zero (a movie whose tags were
/// entirely stop-words has no direction to compare against).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Square, symmetric matrix of pairwise cosine similarities.
///
/// Stored row-major in a flat Vec so serialization is a single buffer and
/// row access is a contiguous slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    dim: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute the full pairwise matrix over the given vectors.
    ///
    /// Rows are computed in parallel with rayon; norms are precomputed once
    /// so each cell is a single dot product.
    pub fn from_vectors(vectors: &[Vec<f32>]) -> Self {
        let dim = vectors.len();
        let norms: Vec<f32> = vectors
            .par_iter()
            .map(|v| v.iter().map(|x| x * x).sum::<f32>().sqrt())
            .collect();

        let norms_ref = &norms;
        let data: Vec<f32> = (0..dim)
            .into_par_iter()
            .flat_map_iter(|i| {
                let norm_i = norms_ref[i];
                (0..dim).map(move |j| {
                    if norm_i == 0.0 || norms_ref[j] == 0.0 {
                        return 0.0;
                    }
                    let dot: f32 = vectors[i]
                        .iter()
                        .zip(vectors[j].iter())
                        .map(|(x, y)| x * y)
                        .sum();
                    dot / (norm_i * norms_ref[j])
                })
            })
            .collect();

        Self { dim, data }
    }

    /// Matrix dimension (equals the catalog length by construction)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Similarity between movies i and j
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.dim + j]
    }

    /// Full similarity row for movie i
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Check the flat buffer actually holds dim * dim cells.
    ///
    /// Used when validating a reloaded artifact; a freshly built matrix
    /// satisfies this by construction.
    pub fn is_well_formed(&self) -> bool {
        self.data.len() == self.dim * self.dim
    }
}
