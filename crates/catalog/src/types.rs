//! Core domain types for the movie catalog.
//!
//! The catalog is an ordered collection of movies. Iteration order is
//! insertion order and defines the index space of the similarity matrix:
//! row/column i of the matrix always corresponds to `catalog.get(i)`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a movie (TMDB id in the bundled dataset)
pub type MovieId = u32;

/// A single recommendable movie.
///
/// `tags` is the bag-of-words document the similarity engine vectorizes:
/// overview, genres, keywords, cast and crew mashed into one string upstream.
/// The catalog treats it as opaque text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "movie_id")]
    pub id: MovieId,
    pub title: String,
    pub tags: String,
}

/// Ordered, immutable-after-build collection of movies.
///
/// Positions in this collection are the canonical indices used by the
/// similarity matrix, so the catalog never reorders or removes movies
/// once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Build a catalog from an ordered list of movies.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Get a movie by its catalog index
    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Iterate over movies in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    /// Find the catalog index of the first movie whose title matches exactly.
    ///
    /// Titles are assumed unique; when they are not, the first match wins
    /// (duplicates are reported by [`Catalog::duplicate_titles`] so callers
    /// can surface them instead of silently picking a row).
    pub fn find_by_title(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.title == title)
    }

    /// Case-insensitive substring search over titles.
    ///
    /// Returns (catalog index, movie) pairs in catalog order.
    pub fn search(&self, query: &str) -> Vec<(usize, &Movie)> {
        let query_lower = query.to_lowercase();
        self.movies
            .iter()
            .enumerate()
            .filter(|(_, m)| m.title.to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Titles that appear more than once in the catalog.
    ///
    /// Lookup by title is first-match-wins, so duplicates make later rows
    /// unreachable by title. Callers log these at build time.
    pub fn duplicate_titles(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for movie in &self.movies {
            if !seen.insert(movie.title.as_str()) && !duplicates.contains(&movie.title.as_str()) {
                duplicates.push(movie.title.as_str());
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            tags: String::new(),
        }
    }

    #[test]
    fn test_find_by_title_first_match_wins() {
        let catalog = Catalog::from_movies(vec![
            movie(1, "Alien"),
            movie(2, "Aliens"),
            movie(3, "Alien"),
        ]);

        // Duplicate title: index 0 wins, index 2 is unreachable by title
        assert_eq!(catalog.find_by_title("Alien"), Some(0));
        assert_eq!(catalog.find_by_title("Aliens"), Some(1));
        assert_eq!(catalog.find_by_title("Avatar"), None);
    }

    #[test]
    fn test_duplicate_titles_detected() {
        let catalog = Catalog::from_movies(vec![
            movie(1, "Alien"),
            movie(2, "Aliens"),
            movie(3, "Alien"),
        ]);

        assert_eq!(catalog.duplicate_titles(), vec!["Alien"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::from_movies(vec![
            movie(1, "The Dark Knight"),
            movie(2, "Dark City"),
            movie(3, "Avatar"),
        ]);

        let results = catalog.search("dark");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, 0);
        assert_eq!(results[1].0, 1);
    }

    #[test]
    fn test_indices_follow_insertion_order() {
        let catalog = Catalog::from_movies(vec![movie(10, "B"), movie(5, "A")]);

        assert_eq!(catalog.get(0).unwrap().id, 10);
        assert_eq!(catalog.get(1).unwrap().id, 5);
        assert!(catalog.get(2).is_none());
    }
}
