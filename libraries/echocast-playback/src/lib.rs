//! Echocast - Playback Coordination
//!
//! Platform-agnostic playback session coordination for Echocast.
//!
//! This crate provides:
//! - Process-wide session store (current track + play/pause intent)
//! - Generation-tagged invalidation of stale device completions
//! - Playback lifecycle state machine (idle, loading, playing, paused,
//!   ended, errored)
//! - Coalesced listening-progress persistence (bounded write rate, explicit
//!   flush on pause/end/teardown)
//! - Seek, skip, and mute transport controls
//!
//! # Architecture
//!
//! `echocast-playback` is completely platform-agnostic:
//! - No dependency on a concrete audio backend
//! - No dependency on echocast-storage (database)
//!
//! The physical audio device is provided via the [`AudioDevice`] trait and
//! reports back through [`DeviceEvent`]s; durable progress goes through the
//! [`ProgressStore`](echocast_core::ProgressStore) trait. The engine is
//! single-threaded: the host delivers device events, user commands, and
//! timer callbacks on its own scheduling turns.
//!
//! # Example: Session Observation
//!
//! ```rust
//! use echocast_playback::SessionStore;
//! use echocast_core::types::TrackDescriptor;
//!
//! let mut store = SessionStore::new();
//!
//! store.observe(|session| {
//!     if let Some(track) = &session.current {
//!         println!("now playing: {}", track.title);
//!     }
//! });
//!
//! let track = TrackDescriptor::new("Episode 1", "https://cdn.example/1.mp3", 1800.0);
//! let generation = store.set_current_track(track);
//! assert_eq!(generation, 1);
//! ```

pub mod device;
pub mod engine;
pub mod error;
pub mod persister;
pub mod session;
pub mod types;

pub use device::{AudioDevice, DeviceEvent};
pub use engine::PlaybackEngine;
pub use error::{PlaybackError, Result};
pub use persister::ProgressPersister;
pub use session::{Session, SessionStore, SubscriptionId};
pub use types::{PlaybackConfig, PlaybackPhase, TransportState};
