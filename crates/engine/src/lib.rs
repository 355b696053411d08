//! # Engine Crate
//!
//! This crate implements the similarity-based recommendation core:
//!
//! ## Components
//!
//! ### Vectorizer
//! Bounded-vocabulary bag-of-words encoding of each movie's tags:
//! - Vocabulary capped at the 5000 most frequent terms
//! - English stop-words excluded
//! - Deterministic fit (frequency ties broken lexicographically)
//!
//! ### SimilarityMatrix
//! Full pairwise cosine similarity over the vectorized catalog, computed
//! once with rayon and read-only afterwards.
//!
//! ### Recommender
//! The query service object: `recommend(title, n)` returns the top-n most
//! similar movies, excluding the query movie, sorted by descending score
//! with catalog-order tie-breaking. Also handles saving/loading the built
//! index so startup can skip recomputation; reloads re-validate that the
//! matrix dimension still matches the catalog.
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::Recommender;
//!
//! let catalog = catalog::load_from_file(Path::new("data/movies.jsonl"))?;
//! let recommender = Recommender::build(catalog)?;
//!
//! for rec in recommender.recommend("Avatar", 5)? {
//!     println!("{} ({:.3})", rec.title, rec.score);
//! }
//! ```

// Public modules
pub mod error;
pub mod recommender;
pub mod similarity;
pub mod vectorizer;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use recommender::{Recommendation, Recommender};
pub use similarity::{SimilarityMatrix, cosine_similarity};
pub use vectorizer::{DEFAULT_MAX_FEATURES, Vectorizer};
