//! # Recommendation Orchestrator
//!
//! This module coordinates a full recommendation query:
//! 1. Run the pure similarity lookup (CPU-bound, off the async runtime)
//! 2. Enrich each result with TMDB metadata, in parallel with a bounded
//!    concurrency limit
//! 3. Return results in recommendation order, each carrying a typed
//!    enrichment outcome
//!
//! Enrichment is strictly best-effort: a failed or timed-out fetch degrades
//! that single item to `Enrichment::Unavailable` and never fails the query.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::sync::Semaphore;
use tracing::{info, warn};

use engine::{Recommendation, Recommender};
use enrichment::{Enrichment, MetadataProvider};
use catalog::MovieId;

/// At most this many enrichment requests are in flight per query
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 5;

/// Final recommendation returned to the caller
#[derive(Debug, Clone)]
pub struct RecommendedMovie {
    pub movie_id: MovieId,
    pub title: String,
    /// Cosine similarity to the query movie
    pub score: f32,
    pub enrichment: Enrichment,
}

/// Coordinates similarity queries and bounded-concurrency enrichment.
#[derive(Clone)]
pub struct RecommendationService {
    recommender: Arc<Recommender>,
    provider: Option<Arc<dyn MetadataProvider>>,
    max_concurrent_fetches: usize,
}

impl RecommendationService {
    /// Create a service with no metadata provider: queries still work,
    /// every result carries a typed "enrichment disabled" absence.
    pub fn new(recommender: Arc<Recommender>) -> Self {
        Self {
            recommender,
            provider: None,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }

    /// Attach a metadata provider (builder pattern)
    pub fn with_provider(mut self, provider: Arc<dyn MetadataProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Configure the enrichment concurrency bound (default: 5)
    pub fn with_max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = max;
        self
    }

    /// Main entry point: recommend up to `n` movies similar to `title`,
    /// enriched with display metadata where possible.
    ///
    /// Fails only on query errors (unknown title, n == 0); enrichment
    /// failures are absorbed per item.
    pub async fn get_recommendations(
        &self,
        title: &str,
        n: usize,
    ) -> Result<Vec<RecommendedMovie>> {
        let start_time = Instant::now();

        // The similarity lookup is synchronous CPU work; keep it off the
        // async runtime threads.
        let recommendations = {
            let recommender = Arc::clone(&self.recommender);
            let title = title.to_string();
            tokio::task::spawn_blocking(move || recommender.recommend(&title, n))
                .await
                .context("Recommendation task panicked")??
        };
        info!(
            "Found {} recommendations for {:?}",
            recommendations.len(),
            title
        );

        let results = match &self.provider {
            Some(provider) => self.enrich_all(recommendations, provider).await?,
            None => recommendations
                .into_iter()
                .map(|rec| RecommendedMovie {
                    movie_id: rec.movie_id,
                    title: rec.title,
                    score: rec.score,
                    enrichment: Enrichment::Unavailable {
                        reason: "enrichment disabled".to_string(),
                    },
                })
                .collect(),
        };

        info!(
            "Completed recommendation query for {:?} in {:.2?}",
            title,
            start_time.elapsed()
        );
        Ok(results)
    }

    /// Enrich every recommendation concurrently, bounded by a semaphore.
    ///
    /// One task per result; output order is recommendation order, not
    /// completion order.
    async fn enrich_all(
        &self,
        recommendations: Vec<Recommendation>,
        provider: &Arc<dyn MetadataProvider>,
    ) -> Result<Vec<RecommendedMovie>> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_fetches));

        let mut handles = Vec::with_capacity(recommendations.len());
        for rec in &recommendations {
            let provider = Arc::clone(provider);
            let semaphore = Arc::clone(&semaphore);
            let movie_id = rec.movie_id;

            handles.push(tokio::spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    // The semaphore is never closed while tasks run; treat a
                    // closed semaphore like any other enrichment failure.
                    Err(_) => {
                        return Enrichment::Unavailable {
                            reason: "enrichment cancelled".to_string(),
                        };
                    }
                };

                match provider.fetch_details(movie_id).await {
                    Ok(details) => Enrichment::Fetched(details),
                    Err(e) => {
                        warn!("Enrichment failed for movie {}: {}", movie_id, e);
                        Enrichment::Unavailable {
                            reason: e.to_string(),
                        }
                    }
                }
            }));
        }

        let mut results = Vec::with_capacity(recommendations.len());
        for (rec, handle) in recommendations.into_iter().zip(handles) {
            let enrichment = handle.await.context("Enrichment task panicked")?;
            results.push(RecommendedMovie {
                movie_id: rec.movie_id,
                title: rec.title,
                score: rec.score,
                enrichment,
            });
        }
        Ok(results)
    }
}
