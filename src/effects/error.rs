//! Effects subsystem error types.

use thiserror::Error;

/// Result type for effects operations.
pub type EffectsResult<T> = Result<T, EffectsError>;

/// Errors that can occur while reading or persisting effect state.
#[derive(Debug, Error)]
pub enum EffectsError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid effect manifest.
    #[error("Invalid effect manifest: {0}")]
    InvalidManifest(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
