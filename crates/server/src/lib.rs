//! Server crate for the ReelMatch recommendation engine.
//!
//! This crate contains the orchestrator that combines the similarity
//! query with bounded-concurrency metadata enrichment.

pub mod orchestrator;

pub use orchestrator::{
    DEFAULT_MAX_CONCURRENT_FETCHES, RecommendationService, RecommendedMovie,
};
