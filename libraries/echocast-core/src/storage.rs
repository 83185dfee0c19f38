//! Durable-store traits consumed by the playback layer
//!
//! The playback crate never touches the database directly; it persists and
//! resolves through these narrow interfaces so hosts can swap the local
//! SQLite store for a remote one.

use crate::error::Result;
use crate::types::{ProgressEntry, TrackDescriptor, TrackId, UserId};
use async_trait::async_trait;

/// Durable listening-progress store
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Insert or replace the progress row for (user, track)
    ///
    /// Last write wins by `updated_at`; the store is not required to reject
    /// out-of-order timestamps; callers avoid issuing them.
    async fn upsert_progress(
        &self,
        user_id: &UserId,
        track_id: &TrackId,
        position_seconds: f64,
        updated_at: i64,
    ) -> Result<()>;

    /// Most recently updated progress rows for a user, newest first
    async fn list_progress(&self, user_id: &UserId, limit: u32) -> Result<Vec<ProgressEntry>>;
}

/// Track metadata resolution
#[async_trait]
pub trait TrackStore: Send + Sync {
    /// Resolve a track ID to its descriptor, `None` if it no longer exists
    async fn get_track(&self, id: &TrackId) -> Result<Option<TrackDescriptor>>;
}
