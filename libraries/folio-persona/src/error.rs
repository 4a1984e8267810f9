//! Error types for the bio personalizer client.

use thiserror::Error;

/// Errors that can occur when requesting a bio rewrite.
#[derive(Error, Debug)]
pub enum PersonaError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("Personalizer error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Authentication required (missing or rejected API key)
    #[error("Authentication required")]
    AuthRequired,

    /// Invalid service URL
    #[error("Invalid personalizer URL: {0}")]
    InvalidUrl(String),

    /// The visitor submitted a blank role
    #[error("Role cannot be empty")]
    EmptyRole,

    /// Failed to parse service response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type alias using `PersonaError`
pub type Result<T> = std::result::Result<T, PersonaError>;

impl From<PersonaError> for folio_core::FolioError {
    fn from(err: PersonaError) -> Self {
        match err {
            PersonaError::EmptyRole => folio_core::FolioError::invalid_input(err.to_string()),
            other => folio_core::FolioError::Other(other.to_string()),
        }
    }
}
