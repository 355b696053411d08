//! # Catalog Crate
//!
//! This crate holds the movie catalog: the ordered set of recommendable
//! movies, each with a stable id, a display title and a bag-of-words
//! tags string.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog)
//! - **parser**: Parse the JSON Lines catalog file
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = catalog::load_from_file(Path::new("data/movies.jsonl"))?;
//!
//! let index = catalog.find_by_title("Avatar").unwrap();
//! let movie = catalog.get(index).unwrap();
//! println!("{} has id {}", movie.title, movie.id);
//! ```
//!
//! ## Ordering Invariant
//!
//! Catalog order is load order and is the index space shared with the
//! similarity matrix built by the engine crate. The catalog is immutable
//! after construction so that invariant cannot drift at runtime.

// Public modules
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::load_from_file;
pub use types::{Catalog, Movie, MovieId};
