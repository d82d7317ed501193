//! Error types for the completion engine.
//!
//! The completion pipeline itself is total: classification always produces a
//! context, dispatch always produces a candidate list, and the insertion
//! editor never fails (inapplicable buffer edits are no-ops). Errors only
//! arise at the catalog-loading boundary, when snippet data is read from an
//! external source instead of the built-in tables.

use std::{fmt, io};

/// Crate-wide `Result` type using [`CompletionError`] as the error.
pub type Result<T> = std::result::Result<T, CompletionError>;

/// Top-level error type for the completion engine.
#[derive(Debug)]
pub enum CompletionError {
    /// Catalog data could not be parsed.
    Catalog(CatalogError),

    /// I/O errors while reading catalog files.
    Io(io::Error),
}

/// Catalog-loading errors.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog JSON could not be deserialized.
    InvalidJson(serde_json::Error),

    /// A catalog file was not found at the given path.
    FileNotFound(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::Catalog(e) => write!(f, "Catalog error: {e}"),
            CompletionError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidJson(e) => write!(f, "Invalid catalog JSON: {e}"),
            CatalogError::FileNotFound(path) => write!(f, "Catalog file not found: {path}"),
        }
    }
}

impl std::error::Error for CompletionError {}
impl std::error::Error for CatalogError {}

/* ========================= Conversions to CompletionError ========================= */

impl From<io::Error> for CompletionError {
    fn from(err: io::Error) -> Self {
        CompletionError::Io(err)
    }
}

impl From<CatalogError> for CompletionError {
    fn from(err: CatalogError) -> Self {
        CompletionError::Catalog(err)
    }
}

impl From<serde_json::Error> for CompletionError {
    fn from(err: serde_json::Error) -> Self {
        CompletionError::Catalog(CatalogError::InvalidJson(err))
    }
}
