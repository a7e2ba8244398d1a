//! Domain error types.
//!
//! Every rejected input has a named variant. No stringly-typed errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("daily consumption must be positive")]
    NonPositiveConsumption,
}

/// Result type alias for core evaluation operations.
pub type CoreResult<T> = Result<T, DomainError>;
