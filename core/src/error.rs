//! Error taxonomy for catalog operations.
//!
//! Two recoverable cases exist: a referenced id that no longer (or never)
//! resolves, and input that fails validation. Anything else is a bug in the
//! caller and surfaces as a panic at the boundary, not as a variant here.

use crate::types::ProductId;
use thiserror::Error;

/// Errors produced by catalog commands and input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The referenced product does not exist.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Input failed a field rule or the update supplied no fields.
    #[error("{0}")]
    Validation(String),
}

impl CatalogError {
    /// Creates a validation error from any message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not-found error for the given id.
    #[must_use]
    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }
}
