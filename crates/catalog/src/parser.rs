//! Parser for the catalog file.
//!
//! The catalog ships as JSON Lines: one movie object per line,
//! `{"movie_id": 19995, "title": "Avatar", "tags": "..."}`.
//! Blank lines are skipped; anything else that fails to decode is a
//! parse error with the offending line number.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Movie};
use std::fs;
use std::path::Path;

/// Load a catalog from a JSON Lines file.
///
/// Fails with [`CatalogError::EmptyCatalog`] when the file contains no
/// movies at all; an empty catalog cannot be built into an index.
pub fn load_from_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    parse_jsonl(&content, &path.display().to_string())
}

/// Parse JSON Lines content into a catalog.
///
/// Split out from the file read so tests can feed strings directly.
pub fn parse_jsonl(content: &str, path: &str) -> Result<Catalog> {
    let mut movies = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue; // Skip empty lines
        }

        let movie: Movie =
            serde_json::from_str(line_trimmed).map_err(|e| CatalogError::ParseError {
                path: path.to_string(),
                line: line_no,
                reason: e.to_string(),
            })?;

        movies.push(movie);
    }

    if movies.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    tracing::info!("Loaded {} movies from {}", movies.len(), path);
    Ok(Catalog::from_movies(movies))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_lines() {
        let content = concat!(
            r#"{"movie_id": 19995, "title": "Avatar", "tags": "space marine pandora"}"#,
            "\n",
            "\n",
            r#"{"movie_id": 285, "title": "Pirates of the Caribbean", "tags": "pirate ship"}"#,
            "\n",
        );

        let catalog = parse_jsonl(content, "movies.jsonl").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().id, 19995);
        assert_eq!(catalog.get(0).unwrap().title, "Avatar");
        assert_eq!(catalog.get(1).unwrap().tags, "pirate ship");
    }

    #[test]
    fn test_parse_error_reports_line_number() {
        let content = concat!(
            r#"{"movie_id": 1, "title": "A", "tags": "x"}"#,
            "\n",
            "not json at all\n",
        );

        let err = parse_jsonl(content, "movies.jsonl").unwrap_err();
        match err {
            CatalogError::ParseError { line, path, .. } => {
                assert_eq!(line, 2);
                assert_eq!(path, "movies.jsonl");
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let content = r#"{"movie_id": 1, "title": "No Tags"}"#;

        let err = parse_jsonl(content, "movies.jsonl").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { line: 1, .. }));
    }

    #[test]
    fn test_empty_file_is_empty_catalog() {
        let err = parse_jsonl("\n\n", "movies.jsonl").unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCatalog));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"movie_id": 7, "title": "Seven", "tags": "crime detective"}}"#).unwrap();
        file.flush().unwrap();

        let catalog = load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().title, "Seven");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_from_file(Path::new("/nonexistent/movies.jsonl")).unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
    }
}
