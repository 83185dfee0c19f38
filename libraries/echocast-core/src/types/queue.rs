/// Ad-hoc queue domain type
use crate::types::{TrackId, UserId};
use serde::{Deserialize, Serialize};

/// Membership row in a user's ad-hoc queue
///
/// Unique per (user, track); duplicate insertion is rejected with
/// `CastError::AlreadyQueued`, never overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Owning user
    pub user_id: UserId,

    /// Queued track
    pub track_id: TrackId,

    /// Unix timestamp (seconds) of insertion
    pub added_at: i64,
}
