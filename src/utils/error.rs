//! Error handling for the support responder
//!
//! Anomalies here are observability data, not control flow: the responder
//! folds every error into the response record's `error` field and still
//! returns a displayable message. No public method returns `Err` or panics.

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, SupportError>;

/// Errors surfaced while resolving a support response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupportError {
    /// Registration status tag outside the six supported values
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    /// Template table inconsistency
    ///
    /// The template table is an exhaustive match over both enums, so this
    /// variant is unreachable today; it stays so callers embedding the crate
    /// can name the full error taxonomy.
    #[error("template error: {0}")]
    Template(String),
}
