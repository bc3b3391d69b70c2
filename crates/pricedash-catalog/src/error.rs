//! Error types for loading the model catalog.

use thiserror::Error;

/// Catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share an id
    #[error("duplicate model id in catalog: {0}")]
    DuplicateId(String),

    /// Catalog has no records
    #[error("catalog is empty")]
    Empty,
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
