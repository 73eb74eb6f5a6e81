//! Domain error type for the import workflow.

use thiserror::Error;

/// Typed error enum for wallet client operations, allowing callers to
/// match on specific failure modes instead of inspecting opaque
/// `anyhow::Error` messages.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Local input validation failure, surfaced inline on the field.
    #[error("{0}")]
    Validation(String),

    /// The node answered, but reported a business failure.
    #[error("{0}")]
    Api(String),

    /// The request itself failed (connection, timeout, malformed body).
    #[error("{0}")]
    Transport(String),

    /// Session store read or write error.
    #[error("{0}")]
    Storage(String),

    /// Unexpected error from internal subsystems.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `std::result::Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;
