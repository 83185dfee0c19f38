/// Listening progress domain type
use crate::types::{TrackId, UserId};
use serde::{Deserialize, Serialize};

/// Fraction of a track's duration at which it counts as finished
///
/// Progress at or above this cutoff excludes the track from
/// continue-listening until the position regresses below it again.
pub const COMPLETION_THRESHOLD: f64 = 0.9;

/// Persisted listening position, unique per (user, track)
///
/// `position_seconds` is clamped to `[0, duration]` by the playback engine
/// before it reaches the durable store. Last write wins by `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Owning user
    pub user_id: UserId,

    /// Referenced track
    pub track_id: TrackId,

    /// Listening position in seconds
    pub position_seconds: f64,

    /// Unix timestamp (seconds) of the last write
    pub updated_at: i64,
}

impl ProgressEntry {
    /// Whether this entry counts as finished for the given track duration
    pub fn is_finished(&self, duration_seconds: f64) -> bool {
        self.position_seconds >= duration_seconds * COMPLETION_THRESHOLD
    }
}
