/// Core error types for Echocast
use crate::types::{PlaylistId, TrackId};
use thiserror::Error;

/// Result type alias using `CastError`
pub type Result<T> = std::result::Result<T, CastError>;

/// Core error type for Echocast
///
/// Playback-path failures never cross the session boundary as errors; the
/// engine degrades to its errored phase instead. Collection and persistence
/// failures propagate through this type so the calling surface can render
/// feedback.
#[derive(Error, Debug)]
pub enum CastError {
    /// Mutation attempted without a resolved identity
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Track not found
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Duplicate enqueue attempt; no row created
    #[error("Track already queued: {0}")]
    AlreadyQueued(TrackId),

    /// Media failed to load or play on the audio device
    #[error("Device error: {0}")]
    Device(String),

    /// Durable progress write failed; bounded by one coalescing window
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CastError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a device error
    pub fn device(msg: impl Into<String>) -> Self {
        Self::Device(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
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

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for CastError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
