//! # Enrichment Crate
//!
//! Fetches display metadata (poster, genres, director, cast, watch link)
//! for recommended movies from TMDB.
//!
//! ## Design
//!
//! - [`MetadataProvider`] is the seam the orchestrator depends on; tests
//!   substitute their own implementations.
//! - [`TmdbClient`] is the real provider: three concurrent GETs per movie,
//!   a per-request timeout and no retry.
//! - [`Enrichment`] is the typed outcome: fetched details or a typed
//!   absence with a reason. A failed fetch degrades one item, never the
//!   whole query.

// Public modules
pub mod error;
pub mod provider;
pub mod tmdb;
pub mod types;

// Re-export commonly used types
pub use error::{EnrichmentError, Result};
pub use provider::MetadataProvider;
pub use tmdb::TmdbClient;
pub use types::{Enrichment, MovieDetails};
