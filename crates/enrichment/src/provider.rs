//! The metadata-provider seam.
//!
//! The orchestrator depends on this trait rather than on the concrete TMDB
//! client, so tests can substitute deterministic or failing providers.

use crate::error::Result;
use crate::types::MovieDetails;
use catalog::MovieId;

/// Fetches display metadata for a movie by id.
///
/// Implementations must be treated as unreliable collaborators: network
/// errors, timeouts and missing fields are expected, and a failure must
/// only ever degrade the one item being enriched.
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails>;
}
