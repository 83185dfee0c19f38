//! Coalesced listening-progress persistence
//!
//! Upserts one position record per (user, track) through the durable-store
//! trait, bounding write amplification: at most one write per track per
//! coalescing window, except for explicit flushes on pause, end-of-media,
//! and teardown. A crash loses at most one window of progress; that bound is
//! accepted and documented.

use echocast_core::error::Result;
use echocast_core::types::{TrackDescriptor, TrackId, UserId};
use echocast_core::ProgressStore;
use std::collections::HashMap;
use std::sync::Arc;

/// Write-coalescing progress recorder
pub struct ProgressPersister {
    store: Arc<dyn ProgressStore>,
    window_seconds: i64,
    last_writes: HashMap<TrackId, i64>,
}

impl ProgressPersister {
    /// Create a persister writing through `store`
    pub fn new(store: Arc<dyn ProgressStore>, window_seconds: i64) -> Self {
        Self {
            store,
            window_seconds,
            last_writes: HashMap::new(),
        }
    }

    /// Record a position, subject to the coalescing window
    ///
    /// Clamps the position to `[0, duration]` before writing. Writes inside
    /// the window for the same track are dropped silently.
    pub async fn record(
        &mut self,
        user_id: &UserId,
        track: &TrackDescriptor,
        position_seconds: f64,
    ) -> Result<()> {
        self.record_at(user_id, track, position_seconds, chrono::Utc::now().timestamp())
            .await
    }

    /// [`record`](Self::record) with an explicit timestamp, for hosts that
    /// batch device ticks
    pub async fn record_at(
        &mut self,
        user_id: &UserId,
        track: &TrackDescriptor,
        position_seconds: f64,
        now: i64,
    ) -> Result<()> {
        if let Some(&last) = self.last_writes.get(&track.id) {
            if now < last || now - last < self.window_seconds {
                return Ok(());
            }
        }
        self.write(user_id, track, position_seconds, now).await
    }

    /// Record a position immediately, bypassing the window
    ///
    /// Used on pause, end-of-media, and teardown so the freshest position is
    /// durable before the caller moves on. Never issues a write with a
    /// timestamp older than the last one for the track.
    pub async fn flush(
        &mut self,
        user_id: &UserId,
        track: &TrackDescriptor,
        position_seconds: f64,
    ) -> Result<()> {
        self.flush_at(user_id, track, position_seconds, chrono::Utc::now().timestamp())
            .await
    }

    /// [`flush`](Self::flush) with an explicit timestamp
    pub async fn flush_at(
        &mut self,
        user_id: &UserId,
        track: &TrackDescriptor,
        position_seconds: f64,
        now: i64,
    ) -> Result<()> {
        if let Some(&last) = self.last_writes.get(&track.id) {
            if now < last {
                return Ok(());
            }
        }
        self.write(user_id, track, position_seconds, now).await
    }

    async fn write(
        &mut self,
        user_id: &UserId,
        track: &TrackDescriptor,
        position_seconds: f64,
        now: i64,
    ) -> Result<()> {
        let position = position_seconds.clamp(0.0, track.duration_seconds);

        tracing::trace!(
            track = %track.id,
            position,
            "persisting listening progress"
        );
        self.store
            .upsert_progress(user_id, &track.id, position, now)
            .await?;
        self.last_writes.insert(track.id.clone(), now);
        Ok(())
    }
}
