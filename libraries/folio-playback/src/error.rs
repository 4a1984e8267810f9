//! Error types for playback and broadcast control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The active highlight set is empty; the viewer cannot open
    #[error("No highlights available")]
    NoHighlights,

    /// Requested item index does not exist
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Camera/microphone access was denied by the operator or platform
    #[error("Capture permission denied: {0}")]
    CaptureDenied(String),

    /// Camera/microphone acquisition failed (hardware error)
    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
