//! Display metadata types.

use crate::error::EnrichmentError;
use serde::{Deserialize, Serialize};

/// Display metadata for one movie, assembled from TMDB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    /// Full poster URL, when TMDB has a poster for this movie
    pub poster_url: Option<String>,
    /// Genre names joined with ", "
    pub genres: String,
    /// Director name, or "Unknown" when no director credit exists
    pub director: String,
    /// Up to five top-billed cast names joined with ", "
    pub cast: String,
    /// Streaming link for the configured region, when available
    pub watch_link: Option<String>,
}

/// Outcome of enriching one recommendation.
///
/// An explicit type instead of sentinel placeholder values, so callers can
/// tell a degraded result apart from a real one.
#[derive(Debug, Clone, PartialEq)]
pub enum Enrichment {
    /// Metadata was fetched successfully
    Fetched(MovieDetails),
    /// Metadata could not be fetched; the recommendation itself stands
    Unavailable { reason: String },
}

impl Enrichment {
    /// Collapse a fetch result into the typed outcome
    pub fn from_result(result: Result<MovieDetails, EnrichmentError>) -> Self {
        match result {
            Ok(details) => Enrichment::Fetched(details),
            Err(e) => Enrichment::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, Enrichment::Fetched(_))
    }
}
