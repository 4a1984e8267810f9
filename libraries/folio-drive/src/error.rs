//! Error types for the drive upload client.

use thiserror::Error;

/// Errors that can occur when uploading media to the drive service.
#[derive(Error, Debug)]
pub enum DriveError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("Drive error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Authentication required (missing or rejected client id)
    #[error("Authentication required")]
    AuthRequired,

    /// Invalid service URL
    #[error("Invalid drive URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse service response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// File not found for upload
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error during upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `DriveError`
pub type Result<T> = std::result::Result<T, DriveError>;

impl From<DriveError> for folio_core::FolioError {
    fn from(err: DriveError) -> Self {
        folio_core::FolioError::upload(err.to_string())
    }
}
