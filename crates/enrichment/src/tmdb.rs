//! TMDB API client
//!
//! Assembles display metadata from three endpoints per movie:
//! 1. Details:   /movie/{id}                  -> poster, genres
//! 2. Credits:   /movie/{id}/credits          -> director, top cast
//! 3. Providers: /movie/{id}/watch/providers  -> regional streaming link
//!
//! The three requests for one movie run concurrently. Each request has a
//! client-level timeout and is never retried: on any failure the caller
//! degrades that single movie to absent metadata.

use crate::error::{EnrichmentError, Result};
use crate::provider::MetadataProvider;
use crate::types::MovieDetails;
use catalog::MovieId;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";
const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
const DEFAULT_REGION: &str = "IN";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// How many top-billed cast members to include in the cast line
const CAST_LIMIT: usize = 5;

// =============================================================================
// TMDB response shapes (only the fields we read; everything else is ignored)
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResponse {
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<NamedEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedEntry {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreditsResponse {
    #[serde(default)]
    pub cast: Vec<NamedEntry>,
    #[serde(default)]
    pub crew: Vec<CrewEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CrewEntry {
    pub name: String,
    #[serde(default)]
    pub job: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProvidersResponse {
    #[serde(default)]
    pub results: HashMap<String, RegionProviders>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegionProviders {
    #[serde(default)]
    pub link: Option<String>,
}

// =============================================================================
// Client
// =============================================================================

/// TMDB metadata client
#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    region: String,
}

impl TmdbClient {
    /// Create a client with the default endpoint, region and timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit per-request timeout.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
        })
    }

    /// Override the watch-provider region (default "IN")
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Override the API base URL (used by tests against a local server)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.api_url, path);
        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EnrichmentError::Status {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbClient {
    async fn fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails> {
        let details_path = format!("/movie/{}", movie_id);
        let credits_path = format!("/movie/{}/credits", movie_id);
        let providers_path = format!("/movie/{}/watch/providers", movie_id);
        let (details, credits, providers) = tokio::try_join!(
            self.get_json::<DetailsResponse>(&details_path),
            self.get_json::<CreditsResponse>(&credits_path),
            self.get_json::<ProvidersResponse>(&providers_path),
        )?;

        let assembled = assemble_details(details, credits, providers, &self.region);
        tracing::debug!(
            movie_id,
            has_poster = assembled.poster_url.is_some(),
            "Fetched TMDB metadata"
        );
        Ok(assembled)
    }
}

/// Combine the three TMDB responses into one [`MovieDetails`].
///
/// Missing fields degrade to empty/absent values rather than erroring; the
/// API is allowed to be sparse.
fn assemble_details(
    details: DetailsResponse,
    credits: CreditsResponse,
    providers: ProvidersResponse,
    region: &str,
) -> MovieDetails {
    let poster_url = details
        .poster_path
        .map(|path| format!("{}{}", POSTER_BASE_URL, path));

    let genres = details
        .genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let director = credits
        .crew
        .iter()
        .find(|c| c.job == "Director")
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    let cast = credits
        .cast
        .iter()
        .take(CAST_LIMIT)
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let watch_link = providers
        .results
        .get(region)
        .and_then(|r| r.link.clone());

    MovieDetails {
        poster_url,
        genres,
        director,
        cast,
        watch_link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_providers() -> ProvidersResponse {
        ProvidersResponse {
            results: HashMap::new(),
        }
    }

    fn empty_credits() -> CreditsResponse {
        CreditsResponse {
            cast: vec![],
            crew: vec![],
        }
    }

    #[test]
    fn test_details_deserialization() {
        let json = r#"{
            "id": 19995,
            "title": "Avatar",
            "poster_path": "/avatar.jpg",
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]
        }"#;

        let details: DetailsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(details.poster_path, Some("/avatar.jpg".to_string()));
        assert_eq!(details.genres.len(), 2);
        assert_eq!(details.genres[1].name, "Science Fiction");
    }

    #[test]
    fn test_details_deserialization_with_missing_fields() {
        // TMDB may omit poster_path and genres entirely
        let details: DetailsResponse = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(details.poster_path, None);
        assert!(details.genres.is_empty());
    }

    #[test]
    fn test_providers_deserialization() {
        let json = r#"{
            "results": {
                "IN": {"link": "https://www.themoviedb.org/movie/19995/watch?locale=IN"},
                "US": {}
            }
        }"#;

        let providers: ProvidersResponse = serde_json::from_str(json).unwrap();
        assert!(providers.results["IN"].link.is_some());
        assert!(providers.results["US"].link.is_none());
    }

    #[test]
    fn test_assemble_poster_url() {
        let details = DetailsResponse {
            poster_path: Some("/avatar.jpg".to_string()),
            genres: vec![],
        };

        let assembled = assemble_details(details, empty_credits(), empty_providers(), "IN");
        assert_eq!(
            assembled.poster_url,
            Some("https://image.tmdb.org/t/p/w500/avatar.jpg".to_string())
        );
    }

    #[test]
    fn test_assemble_director_from_crew() {
        let credits = CreditsResponse {
            cast: vec![],
            crew: vec![
                CrewEntry {
                    name: "Jon Landau".to_string(),
                    job: "Producer".to_string(),
                },
                CrewEntry {
                    name: "James Cameron".to_string(),
                    job: "Director".to_string(),
                },
            ],
        };

        let details = DetailsResponse {
            poster_path: None,
            genres: vec![],
        };
        let assembled = assemble_details(details, credits, empty_providers(), "IN");
        assert_eq!(assembled.director, "James Cameron");
    }

    #[test]
    fn test_assemble_director_defaults_to_unknown() {
        let details = DetailsResponse {
            poster_path: None,
            genres: vec![],
        };
        let assembled = assemble_details(details, empty_credits(), empty_providers(), "IN");
        assert_eq!(assembled.director, "Unknown");
    }

    #[test]
    fn test_assemble_caps_cast_at_five() {
        let credits = CreditsResponse {
            cast: (1..=8)
                .map(|i| NamedEntry {
                    name: format!("Actor {}", i),
                })
                .collect(),
            crew: vec![],
        };

        let details = DetailsResponse {
            poster_path: None,
            genres: vec![],
        };
        let assembled = assemble_details(details, credits, empty_providers(), "IN");
        assert_eq!(assembled.cast, "Actor 1, Actor 2, Actor 3, Actor 4, Actor 5");
    }

    #[test]
    fn test_assemble_watch_link_respects_region() {
        let mut results = HashMap::new();
        results.insert(
            "US".to_string(),
            RegionProviders {
                link: Some("https://example.com/us".to_string()),
            },
        );
        let providers = ProvidersResponse { results };

        let details = DetailsResponse {
            poster_path: None,
            genres: vec![],
        };
        let assembled = assemble_details(details, empty_credits(), providers, "US");
        assert_eq!(assembled.watch_link, Some("https://example.com/us".to_string()));

        let details = DetailsResponse {
            poster_path: None,
            genres: vec![],
        };
        let assembled = assemble_details(details, empty_credits(), empty_providers(), "IN");
        assert_eq!(assembled.watch_link, None);
    }

    #[test]
    fn test_assemble_joins_genres() {
        let details = DetailsResponse {
            poster_path: None,
            genres: vec![
                NamedEntry {
                    name: "Action".to_string(),
                },
                NamedEntry {
                    name: "Adventure".to_string(),
                },
            ],
        };

        let assembled = assemble_details(details, empty_credits(), empty_providers(), "IN");
        assert_eq!(assembled.genres, "Action, Adventure");
    }
}
