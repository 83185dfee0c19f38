//! Error types for playback session coordination

use thiserror::Error;

/// Playback errors
///
/// These stay on the device side of the session boundary: the engine turns
/// them into the errored phase instead of propagating them to callers.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Audio device rejected a load, transport, or mute command
    #[error("Device error: {0}")]
    Device(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
