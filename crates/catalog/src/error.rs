//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading and validating the movie catalog
///
/// The `#[derive(Error)]` macro from thiserror automatically implements
/// the `std::error::Error` trait and `Display` based on our `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the catalog file couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {path}: {reason}")]
    ParseError {
        path: String,
        line: usize,
        reason: String,
    },

    /// The catalog file parsed successfully but contained no movies.
    ///
    /// An empty catalog has no valid similarity matrix, so this is fatal
    /// at build time rather than a degraded state.
    #[error("Catalog is empty: no movies to recommend from")]
    EmptyCatalog,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
