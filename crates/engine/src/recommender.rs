//! The recommendation service object.
//!
//! A [`Recommender`] bundles the catalog, the fitted vectorizer and the
//! precomputed similarity matrix into one explicitly constructed, immutable
//! value. Queries are pure reads, so wrapping it in `Arc` makes it safe to
//! share across concurrent callers without locking. There is deliberately
//! no global cached instance.

use crate::error::{EngineError, Result};
use crate::similarity::SimilarityMatrix;
use crate::vectorizer::{DEFAULT_MAX_FEATURES, Vectorizer};
use catalog::{Catalog, MovieId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// One ranked query result
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Catalog index of the recommended movie
    pub index: usize,
    pub movie_id: MovieId,
    pub title: String,
    /// Cosine similarity to the query movie, in [0, 1]
    pub score: f32,
}

/// On-disk form of a built index.
///
/// Saved as one JSON document; [`Recommender::load`] re-checks the
/// index-correspondence invariant before accepting it.
#[derive(Serialize, Deserialize)]
struct SavedIndex {
    catalog: Catalog,
    vectorizer: Vectorizer,
    matrix: SimilarityMatrix,
}

/// Immutable similarity-based recommender over a fixed catalog.
#[derive(Debug)]
pub struct Recommender {
    catalog: Catalog,
    vectorizer: Vectorizer,
    matrix: SimilarityMatrix,
}

impl Recommender {
    /// Build the index from a catalog: fit the vocabulary, vectorize every
    /// movie and compute the full pairwise similarity matrix.
    ///
    /// One-time batch work, amortized over all subsequent queries. Fails
    /// with [`EngineError::EmptyCatalog`] when there is nothing to index.
    pub fn build(catalog: Catalog) -> Result<Self> {
        Self::build_with_max_features(catalog, DEFAULT_MAX_FEATURES)
    }

    /// Same as [`Recommender::build`] with an explicit vocabulary cap.
    pub fn build_with_max_features(catalog: Catalog, max_features: usize) -> Result<Self> {
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        // Title lookup is first-match-wins; make duplicates visible instead
        // of silently shadowing later rows.
        for title in catalog.duplicate_titles() {
            warn!("Duplicate title in catalog: {:?} (first occurrence wins)", title);
        }

        let start = Instant::now();
        let vectorizer = Vectorizer::fit(&catalog, max_features);
        info!(
            "Fitted vocabulary of {} terms over {} movies",
            vectorizer.vocabulary_size(),
            catalog.len()
        );

        let vectors: Vec<Vec<f32>> = catalog.iter().map(|m| vectorizer.transform(&m.tags)).collect();
        let matrix = SimilarityMatrix::from_vectors(&vectors);
        info!(
            "Built {}x{} similarity matrix in {:.2?}",
            matrix.dim(),
            matrix.dim(),
            start.elapsed()
        );

        Ok(Self {
            catalog,
            vectorizer,
            matrix,
        })
    }

    /// The catalog this index was built over
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Vocabulary size of the fitted vectorizer
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// Return the up-to-n movies most similar to the given title.
    ///
    /// Results are sorted by descending similarity; equal scores keep
    /// catalog order (stable sort), so repeated calls return identical
    /// sequences. The query movie itself is excluded. When fewer than n
    /// other movies exist, all of them are returned rather than failing.
    ///
    /// Pure function of (catalog, matrix, title, n): no side effects.
    pub fn recommend(&self, title: &str, n: usize) -> Result<Vec<Recommendation>> {
        if n == 0 {
            return Err(EngineError::InvalidCount);
        }

        let query_index = self
            .catalog
            .find_by_title(title)
            .ok_or_else(|| EngineError::TitleNotFound {
                title: title.to_string(),
            })?;

        let row = self.matrix.row(query_index);
        let mut ranked: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
        // Stable sort: ties stay in catalog order, output is deterministic
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let recommendations = ranked
            .into_iter()
            .filter(|&(index, _)| index != query_index)
            .take(n)
            .map(|(index, score)| {
                let movie = self.catalog.get(index).expect("matrix row index within catalog");
                Recommendation {
                    index,
                    movie_id: movie.id,
                    title: movie.title.clone(),
                    score,
                }
            })
            .collect();

        Ok(recommendations)
    }

    /// Serialize the built index to disk so startup can skip recomputation.
    pub fn save(&self, path: &Path) -> Result<()> {
        let saved = SavedIndex {
            catalog: self.catalog.clone(),
            vectorizer: self.vectorizer.clone(),
            matrix: self.matrix.clone(),
        };
        let json = serde_json::to_vec(&saved)?;
        std::fs::write(path, json)?;
        info!("Saved index artifact to {}", path.display());
        Ok(())
    }

    /// Reload a previously saved index.
    ///
    /// The index-correspondence invariant is re-validated: the matrix
    /// dimension must equal the catalog length and the flat buffer must be
    /// exactly dim x dim. A mismatched artifact (catalog and matrix from
    /// different snapshots) would silently produce wrong recommendations,
    /// so it is rejected as a fatal error.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let saved: SavedIndex = serde_json::from_slice(&bytes)?;

        if saved.matrix.dim() != saved.catalog.len() || !saved.matrix.is_well_formed() {
            return Err(EngineError::DimensionMismatch {
                catalog: saved.catalog.len(),
                matrix: saved.matrix.dim(),
            });
        }

        if saved.catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        info!(
            "Loaded index artifact from {} ({} movies)",
            path.display(),
            saved.catalog.len()
        );
        Ok(Self {
            catalog: saved.catalog,
            vectorizer: saved.vectorizer,
            matrix: saved.matrix,
        })
    }
}
