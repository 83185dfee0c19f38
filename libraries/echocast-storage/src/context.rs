use crate::{progress, tracks};
use async_trait::async_trait;
use echocast_core::{error::Result, types::*, ProgressStore, TrackStore};
use sqlx::SqlitePool;

/// Local durable store backed by `SQLite`
///
/// Implements the narrow core traits the playback layer persists through.
pub struct StorageContext {
    pool: SqlitePool,
}

impl StorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ProgressStore for StorageContext {
    async fn upsert_progress(
        &self,
        user_id: &UserId,
        track_id: &TrackId,
        position_seconds: f64,
        updated_at: i64,
    ) -> Result<()> {
        progress::upsert(&self.pool, user_id, track_id, position_seconds, updated_at).await
    }

    async fn list_progress(&self, user_id: &UserId, limit: u32) -> Result<Vec<ProgressEntry>> {
        progress::list(&self.pool, user_id, limit).await
    }
}

#[async_trait]
impl TrackStore for StorageContext {
    async fn get_track(&self, id: &TrackId) -> Result<Option<TrackDescriptor>> {
        tracks::get(&self.pool, id).await
    }
}
