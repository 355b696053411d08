//! Error types for the engine crate.

use thiserror::Error;

/// Errors from building, querying and persisting the recommendation index
#[derive(Error, Debug)]
pub enum EngineError {
    /// Building an index over zero movies is fatal, not degraded
    #[error("Cannot build an index over an empty catalog")]
    EmptyCatalog,

    /// No movie in the catalog has exactly this title
    #[error("No movie found with title {title:?}")]
    TitleNotFound { title: String },

    /// `recommend` requires n >= 1
    #[error("Requested recommendation count must be at least 1")]
    InvalidCount,

    /// A reloaded artifact whose matrix does not match its catalog would
    /// silently produce wrong recommendations, so the mismatch is fatal.
    #[error("Index artifact is inconsistent: catalog has {catalog} movies but matrix dimension is {matrix}")]
    DimensionMismatch { catalog: usize, matrix: usize },

    /// I/O error while reading or writing the index artifact
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Artifact could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;
