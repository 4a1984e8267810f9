/// Core error types for Folio
use thiserror::Error;

/// Result type alias using `FolioError`
pub type Result<T> = std::result::Result<T, FolioError>;

/// Core error type for Folio
///
/// Failures are terminal at the point of occurrence: the embedding UI
/// surfaces them as a blocking notification and the operation is not
/// retried. Nothing here bubbles through multiple layers.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Content store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Camera/microphone acquisition failed or was denied
    #[error("Capture error: {0}")]
    Capture(String),

    /// Media upload failed
    #[error("Upload error: {0}")]
    Upload(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl FolioError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a capture error
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Create an upload error
    pub fn upload(msg: impl Into<String>) -> Self {
        Self::Upload(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
