//! Bounded-vocabulary bag-of-words vectorization.
//!
//! Turns each movie's tags string into a fixed-length term-count vector:
//! - lowercase, split on non-alphanumeric characters
//! - drop single-character tokens and English stop-words
//! - keep only the `max_features` most frequent terms across the catalog
//!
//! Fitting is deterministic: frequency ties are broken lexicographically,
//! and columns are assigned in lexicographic term order.

use catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Vocabulary cap used by [`Vectorizer::fit`] unless overridden.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Common English words excluded from the vocabulary.
///
/// These carry no similarity signal for tag documents and would otherwise
/// crowd the bounded vocabulary with noise.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "became", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "came", "can", "cannot", "come", "could", "did", "do", "does", "doing",
    "down", "during", "each", "else", "ever", "every", "few", "for", "from", "further", "get",
    "gets", "got", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "however", "i", "if", "in", "into", "is", "it", "its", "itself",
    "just", "like", "made", "make", "many", "may", "me", "might", "more", "most", "much", "must",
    "my", "myself", "never", "no", "nor", "not", "now", "of", "off", "on", "once", "one", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "per", "same", "she",
    "should", "since", "so", "some", "still", "such", "take", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "upon", "us", "very", "was", "we", "well", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "within",
    "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Split a tags string into normalized tokens.
///
/// Tokens are lowercased alphanumeric runs of length >= 2 that are not
/// stop-words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= 2 && !STOP_WORDS.contains(token))
        .map(|token| token.to_string())
        .collect()
}

/// Maps tag terms to similarity-vector columns.
///
/// Fit once over the whole catalog, then applied unchanged to every movie
/// so all vectors share the same column space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vectorizer {
    /// term -> column index
    vocabulary: HashMap<String, usize>,
}

impl Vectorizer {
    /// Fit a vocabulary over the catalog, capped at `max_features` terms.
    ///
    /// Term selection is by total occurrence count across all movies,
    /// most frequent first. Ties on count are broken lexicographically and
    /// the surviving terms get columns in lexicographic order, so the same
    /// catalog always fits to the same vectorizer.
    pub fn fit(catalog: &Catalog, max_features: usize) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for movie in catalog.iter() {
            for token in tokenize(&movie.tags) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_features);

        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort();

        let vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(column, term)| (term, column))
            .collect();

        Self { vocabulary }
    }

    /// Number of terms in the fitted vocabulary (the vector length)
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Transform a tags string into its term-count vector.
    ///
    /// Out-of-vocabulary tokens are ignored, matching fit-time truncation.
    pub fn transform(&self, tags: &str) -> Vec<f32> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in tokenize(tags) {
            if let Some(&column) = self.vocabulary.get(&token) {
                vector[column] += 1.0;
            }
        }
        vector
    }
}
