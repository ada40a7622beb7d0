//! Catalog error model.

use thiserror::Error;

/// Result type used at the catalog loading boundary.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Filtering, sorting and aggregation never fail; these errors only surface
/// where raw input is turned into typed catalog data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A value failed validation (e.g. a blank product name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A catalog document could not be parsed at all.
    #[error("malformed catalog: {0}")]
    Malformed(String),

    /// A requested product was not found.
    #[error("product not found: {0}")]
    NotFound(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}
