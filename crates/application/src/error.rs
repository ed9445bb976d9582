//! Application error types

use courier_domain::DomainError;
use thiserror::Error;

use crate::ports::BackendError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A structured pair edit addressed a missing pair.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The backend rejected or failed a command.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// A command was invoked without what it needs, before any backend call.
    #[error("{0}")]
    Precondition(String),

    /// Navigation to a route failed.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// A backend result or cache entry had an unexpected shape.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
