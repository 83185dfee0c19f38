//! Core types for playback session coordination

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback lifecycle phase
///
/// `Idle → Loading → {Playing, Paused} → Ended → Idle`, with `Errored`
/// reachable from `Loading` or `Playing`. There is no automatic retry out of
/// `Errored`; only a fresh user-initiated play re-attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackPhase {
    /// No track loaded
    Idle,

    /// Track selected, waiting on device metadata
    Loading,

    /// Device is rendering audio
    Playing,

    /// Paused mid-track
    Paused,

    /// Media ran out; lingers briefly before settling back to idle
    Ended,

    /// Load or playback failed on the device
    Errored,
}

/// Live transport metrics for the active device
///
/// Derived state, never persisted. Position and duration are reset whenever
/// the session's track identity changes; mute survives track switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportState {
    /// Current playback position in seconds
    pub position_seconds: f64,

    /// Media duration in seconds (0 until the device reports metadata)
    pub duration_seconds: f64,

    /// Whether the device is muted
    pub muted: bool,

    /// Current lifecycle phase
    pub phase: PlaybackPhase,
}

impl Default for TransportState {
    fn default() -> Self {
        Self {
            position_seconds: 0.0,
            duration_seconds: 0.0,
            muted: false,
            phase: PlaybackPhase::Idle,
        }
    }
}

/// Configuration for the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Step applied by the skip-forward/skip-back helpers (default: 5 s)
    pub seek_step_seconds: f64,

    /// Minimum interval between persisted-progress writes per track
    /// (default: 5 s)
    pub write_window_seconds: i64,

    /// Grace delay between end-of-media and settling back to idle, so a
    /// close affordance can render (default: 500 ms)
    pub ended_linger: Duration,

    /// Maximum number of resumable tracks a host requests for its
    /// continue-listening shelf (default: 10)
    pub continue_limit: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            seek_step_seconds: 5.0,
            write_window_seconds: 5,
            ended_linger: Duration::from_millis(500),
            continue_limit: 10,
        }
    }
}
