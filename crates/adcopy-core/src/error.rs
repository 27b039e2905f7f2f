//! Unified error type exposed by **`adcopy-core`**.
//!
//! Backend crates convert their internal errors into one of these variants
//! before handing them to the caption generator, which in turn folds every
//! variant into a single user-facing message.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, AdcopyError>;

#[derive(Debug, Error)]
pub enum AdcopyError {
    /// Generic forwarding of any backend-specific error.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The parameters cannot be turned into a provider request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Misconfiguration detected while building a backend.
    #[error("invalid: {0}")]
    Invalid(String),
}
