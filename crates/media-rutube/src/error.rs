//! Error types for RuTube embedding

use thiserror::Error;

/// Errors that can occur during embed operations
///
/// Matching and time parsing never fail; these cover the edges where the
/// crate touches host input and host services.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// Text is not an absolute URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Settings document is malformed
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// Settings file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for EmbedError {
    fn from(err: serde_json::Error) -> Self {
        EmbedError::Settings(err.to_string())
    }
}

/// Result type for embed operations
pub type Result<T> = std::result::Result<T, EmbedError>;
