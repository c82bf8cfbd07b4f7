//! Error types for the bookshelf catalog.

use thiserror::Error;

/// Main error type for catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No book in the catalog matches the requested identifier. Lookup
    /// signals this explicitly rather than returning an empty placeholder.
    #[error("Book not found: {id}")]
    NotFound { id: String },
}

/// Result type alias using CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
