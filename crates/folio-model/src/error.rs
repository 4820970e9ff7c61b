//! Error types for the data model.

use thiserror::Error;

/// Errors raised when parsing identifiers into model types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Category string is not one of `dev` or `research`.
    #[error("unknown project category: {0}")]
    UnknownCategory(String),

    /// Filter string is not one of `all`, `dev`, or `research`.
    #[error("unknown project filter: {0}")]
    UnknownFilter(String),

    /// Anchor id does not name a section or the research page.
    #[error("unknown navigation target: {0}")]
    UnknownTarget(String),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
