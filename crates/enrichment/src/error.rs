//! Error types for the enrichment crate.

use thiserror::Error;

/// Errors from fetching metadata from TMDB.
///
/// These never fail a recommendation query: the orchestrator converts them
/// into a typed [`crate::Enrichment::Unavailable`] for the affected item.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    /// Network-level failure, including per-request timeouts
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// TMDB answered with a non-success status
    #[error("TMDB returned status {status}")]
    Status { status: u16 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EnrichmentError>;
