//! Platform-agnostic audio device abstraction
//!
//! Abstracts the physical audio-rendering device (HTML audio element, ALSA,
//! CoreAudio, ...) behind a command trait plus an asynchronous event stream.

use crate::error::Result;
use echocast_core::types::TrackDescriptor;
use serde::{Deserialize, Serialize};

/// Commands the playback engine issues to the audio device
///
/// Commands return immediately; anything that takes time on the device
/// (loading media, reaching end of stream) reports back later as a
/// [`DeviceEvent`]. `load` receives the generation current at issue time,
/// and the device must echo it on every event produced for that media; the
/// engine discards events whose generation no longer matches the session.
///
/// Timeouts on device operations are the device's own responsibility.
pub trait AudioDevice: Send {
    /// Begin loading the track's media; metadata arrives as an event
    fn load(&mut self, track: &TrackDescriptor, generation: u64) -> Result<()>;

    /// Begin or resume rendering
    fn play(&mut self) -> Result<()>;

    /// Pause rendering
    fn pause(&mut self) -> Result<()>;

    /// Jump to an absolute position in seconds
    fn seek(&mut self, position_seconds: f64) -> Result<()>;

    /// Set the mute flag
    fn set_muted(&mut self, muted: bool) -> Result<()>;
}

/// Asynchronous reports from the audio device
///
/// Delivered to [`PlaybackEngine::handle_device_event`] together with the
/// generation the device captured at `load` time. Events may arrive in any
/// order relative to subsequently issued commands.
///
/// [`PlaybackEngine::handle_device_event`]: crate::PlaybackEngine::handle_device_event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeviceEvent {
    /// Media metadata is ready
    MetadataLoaded {
        /// Total media duration in seconds
        duration_seconds: f64,
    },

    /// Periodic position tick while rendering
    Position {
        /// Current position in seconds
        position_seconds: f64,
    },

    /// Media played through to the end
    Ended,

    /// Load or playback failed
    Failed {
        /// Device-provided description
        message: String,
    },
}
