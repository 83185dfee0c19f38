//! Test helpers for playback integration tests
//!
//! A scriptable mock audio device that records every command it receives,
//! and an in-memory progress store that counts writes.

use async_trait::async_trait;
use echocast_core::error::{CastError, Result};
use echocast_core::types::{ProgressEntry, TrackDescriptor, TrackId, UserId};
use echocast_core::ProgressStore;
use echocast_playback::AudioDevice;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A command the engine issued to the mock device
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCommand {
    Load { track_id: String, generation: u64 },
    Play,
    Pause,
    Seek(f64),
    SetMuted(bool),
}

/// Shared handle for inspecting and scripting a [`MockDevice`] after it has
/// been boxed into the engine
#[derive(Clone, Default)]
pub struct DeviceProbe {
    commands: Arc<Mutex<Vec<DeviceCommand>>>,
    fail_load: Arc<AtomicBool>,
    fail_play: Arc<AtomicBool>,
}

impl DeviceProbe {
    pub fn commands(&self) -> Vec<DeviceCommand> {
        self.commands.lock().unwrap().clone()
    }

    pub fn fail_load(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::SeqCst);
    }

    pub fn fail_play(&self, fail: bool) {
        self.fail_play.store(fail, Ordering::SeqCst);
    }
}

/// Mock audio device recording commands into its probe
pub struct MockDevice {
    probe: DeviceProbe,
}

impl MockDevice {
    pub fn new() -> (Self, DeviceProbe) {
        let probe = DeviceProbe::default();
        (
            Self {
                probe: probe.clone(),
            },
            probe,
        )
    }

    fn push(&self, command: DeviceCommand) {
        self.probe.commands.lock().unwrap().push(command);
    }
}

impl AudioDevice for MockDevice {
    fn load(
        &mut self,
        track: &TrackDescriptor,
        generation: u64,
    ) -> echocast_playback::Result<()> {
        if self.probe.fail_load.load(Ordering::SeqCst) {
            return Err(echocast_playback::PlaybackError::Device(
                "load refused".to_string(),
            ));
        }
        self.push(DeviceCommand::Load {
            track_id: track.id.as_str().to_string(),
            generation,
        });
        Ok(())
    }

    fn play(&mut self) -> echocast_playback::Result<()> {
        if self.probe.fail_play.load(Ordering::SeqCst) {
            return Err(echocast_playback::PlaybackError::Device(
                "play refused".to_string(),
            ));
        }
        self.push(DeviceCommand::Play);
        Ok(())
    }

    fn pause(&mut self) -> echocast_playback::Result<()> {
        self.push(DeviceCommand::Pause);
        Ok(())
    }

    fn seek(&mut self, position_seconds: f64) -> echocast_playback::Result<()> {
        self.push(DeviceCommand::Seek(position_seconds));
        Ok(())
    }

    fn set_muted(&mut self, muted: bool) -> echocast_playback::Result<()> {
        self.push(DeviceCommand::SetMuted(muted));
        Ok(())
    }
}

/// In-memory [`ProgressStore`] that counts writes and can be told to fail
#[derive(Default)]
pub struct MemoryProgressStore {
    entries: Mutex<HashMap<(String, String), ProgressEntry>>,
    writes: AtomicUsize,
    fail: AtomicBool,
}

impl MemoryProgressStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn position_for(&self, user_id: &UserId, track_id: &TrackId) -> Option<f64> {
        self.entries
            .lock()
            .unwrap()
            .get(&(
                user_id.as_str().to_string(),
                track_id.as_str().to_string(),
            ))
            .map(|entry| entry.position_seconds)
    }
}

#[async_trait]
impl ProgressStore for MemoryProgressStore {
    async fn upsert_progress(
        &self,
        user_id: &UserId,
        track_id: &TrackId,
        position_seconds: f64,
        updated_at: i64,
    ) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CastError::storage("simulated write failure"));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().insert(
            (
                user_id.as_str().to_string(),
                track_id.as_str().to_string(),
            ),
            ProgressEntry {
                user_id: user_id.clone(),
                track_id: track_id.clone(),
                position_seconds,
                updated_at,
            },
        );
        Ok(())
    }

    async fn list_progress(&self, user_id: &UserId, limit: u32) -> Result<Vec<ProgressEntry>> {
        let mut entries: Vec<ProgressEntry> = self
            .entries
            .lock()
            .unwrap()
            .values()
            .filter(|entry| entry.user_id == *user_id)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| std::cmp::Reverse(entry.updated_at));
        entries.truncate(limit as usize);
        Ok(entries)
    }
}

/// Fixture: a track with a fixed id and duration
pub fn test_track(id: &str, duration_seconds: f64) -> TrackDescriptor {
    let mut track = TrackDescriptor::new(
        format!("Episode {id}"),
        format!("https://cdn.example/{id}.mp3"),
        duration_seconds,
    );
    track.id = TrackId::new(id);
    track
}

pub fn test_user() -> UserId {
    UserId::new("listener-1")
}
