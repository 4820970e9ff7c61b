//! Error types for the behavioral core.

use folio_model::ProjectId;
use thiserror::Error;

/// Errors raised by core state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A repeating timer was configured with a zero interval.
    #[error("timer interval must be greater than zero")]
    ZeroInterval,

    /// A project id does not name any showcase project.
    #[error("unknown project {0}")]
    UnknownProject(ProjectId),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
