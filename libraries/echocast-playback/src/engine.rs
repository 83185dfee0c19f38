//! Playback engine - session-driven device orchestration
//!
//! Owns the audio device and the session store, drives the device through
//! the playback lifecycle, and mirrors live transport state back out.
//! Single-threaded and event-driven: device events, user commands, and timer
//! callbacks all arrive on the host's scheduling turn.

use crate::device::{AudioDevice, DeviceEvent};
use crate::persister::ProgressPersister;
use crate::session::{Session, SessionStore, SubscriptionId};
use crate::types::{PlaybackConfig, PlaybackPhase, TransportState};
use echocast_core::types::{TrackDescriptor, UserId};
use echocast_core::ProgressStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Session-driven playback coordinator
///
/// The ordering guarantee: every device event carries the generation
/// captured when its media was loaded, and [`handle_device_event`] applies
/// the event only while that generation is still current. A slow completion
/// for a superseded track can therefore never corrupt the state of the track
/// the user switched to. Cancellation is implicit in that check: the
/// underlying device operation is never awaited or aborted.
///
/// Persistence is best-effort: progress write failures are logged and
/// swallowed, never interrupting playback. The loss bound is one coalescing
/// window.
///
/// [`handle_device_event`]: Self::handle_device_event
pub struct PlaybackEngine {
    session: SessionStore,
    device: Box<dyn AudioDevice>,
    transport: TransportState,
    config: PlaybackConfig,
    persister: ProgressPersister,
    user: Option<UserId>,
    stop_affordance: bool,
}

impl PlaybackEngine {
    /// Create an idle engine around a device and a durable progress store
    pub fn new(
        device: Box<dyn AudioDevice>,
        progress_store: Arc<dyn ProgressStore>,
        config: PlaybackConfig,
    ) -> Self {
        let persister = ProgressPersister::new(progress_store, config.write_window_seconds);
        Self {
            session: SessionStore::new(),
            device,
            transport: TransportState::default(),
            config,
            persister,
            user: None,
            stop_affordance: false,
        }
    }

    /// Attach or detach the resolved user identity
    ///
    /// Progress is persisted only while an identity is attached; playback
    /// itself never requires one.
    pub fn set_user(&mut self, user: Option<UserId>) {
        self.user = user;
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Session {
        self.session.get()
    }

    /// Generation of the current track identity
    pub fn generation(&self) -> u64 {
        self.session.generation()
    }

    /// Live transport state
    pub fn transport(&self) -> &TransportState {
        &self.transport
    }

    /// Whether the surrounding surface should render its stop affordance
    pub fn stop_affordance(&self) -> bool {
        self.stop_affordance
    }

    /// Grace delay the host waits before calling [`finish_ended`](Self::finish_ended)
    pub fn ended_linger(&self) -> Duration {
        self.config.ended_linger
    }

    /// Row limit the host passes to its continue-listening query
    pub fn continue_limit(&self) -> u32 {
        self.config.continue_limit
    }

    /// Register a session observer
    pub fn observe_session(
        &mut self,
        callback: impl Fn(&Session) + Send + 'static,
    ) -> SubscriptionId {
        self.session.observe(callback)
    }

    /// Remove a session observer
    pub fn unobserve_session(&mut self, id: SubscriptionId) -> bool {
        self.session.unobserve(id)
    }

    /// Select a track and start loading it
    ///
    /// Flushes the outgoing track's progress, replaces the session (bumping
    /// the generation), resets the transport, and issues the device load
    /// tagged with the new generation. Transport position is zeroed before
    /// any event for the new track can possibly be processed.
    pub async fn select_track(&mut self, track: TrackDescriptor) {
        self.flush_progress().await;

        let generation = self.session.set_current_track(track.clone());
        self.transport.position_seconds = 0.0;
        self.transport.duration_seconds = 0.0;
        self.transport.phase = PlaybackPhase::Loading;
        self.stop_affordance = false;

        debug!(track = %track.id, generation, "loading track");
        if let Err(e) = self.device.load(&track, generation) {
            warn!(track = %track.id, error = %e, "device rejected load");
            self.transport.phase = PlaybackPhase::Errored;
        }
    }

    /// Apply an asynchronous device event
    ///
    /// Events tagged with a superseded generation are discarded.
    pub async fn handle_device_event(&mut self, generation: u64, event: DeviceEvent) {
        if generation != self.session.generation() {
            trace!(
                generation,
                current = self.session.generation(),
                "dropping stale device event"
            );
            return;
        }

        match event {
            DeviceEvent::MetadataLoaded { duration_seconds } => {
                self.transport.duration_seconds = duration_seconds;
                if self.session.get().playing {
                    match self.device.play() {
                        Ok(()) => self.transport.phase = PlaybackPhase::Playing,
                        Err(e) => {
                            warn!(error = %e, "device rejected playback start");
                            self.transport.phase = PlaybackPhase::Errored;
                        }
                    }
                } else {
                    self.transport.phase = PlaybackPhase::Paused;
                }
            }
            DeviceEvent::Position { position_seconds } => {
                self.transport.position_seconds = position_seconds;
                self.record_progress().await;
            }
            DeviceEvent::Ended => {
                debug!("end of media");
                self.transport.position_seconds = self.transport.duration_seconds;
                self.transport.phase = PlaybackPhase::Ended;
                self.session.set_playing(false);
                self.flush_progress().await;
            }
            DeviceEvent::Failed { message } => {
                warn!(message, "device reported failure");
                self.transport.phase = PlaybackPhase::Errored;
            }
        }
    }

    /// Settle from `Ended` back to `Idle`
    ///
    /// The host calls this after [`ended_linger`](Self::ended_linger) so the
    /// close affordance can render momentarily.
    pub fn finish_ended(&mut self) {
        if self.transport.phase != PlaybackPhase::Ended {
            return;
        }
        self.session.clear();
        self.transport = TransportState {
            muted: self.transport.muted,
            ..TransportState::default()
        };
        self.stop_affordance = false;
    }

    /// Begin or resume playback
    ///
    /// From `Paused` this resumes; from `Errored` it is the one retry path,
    /// a fresh user-initiated attempt. Device rejection degrades back to
    /// `Errored` rather than surfacing an error.
    pub fn play(&mut self) {
        match self.transport.phase {
            PlaybackPhase::Paused | PlaybackPhase::Errored => match self.device.play() {
                Ok(()) => {
                    self.transport.phase = PlaybackPhase::Playing;
                    self.session.set_playing(true);
                }
                Err(e) => {
                    warn!(error = %e, "device rejected play");
                    self.transport.phase = PlaybackPhase::Errored;
                }
            },
            PlaybackPhase::Loading => {
                // Metadata hasn't landed yet; record the intent so it starts
                // on arrival
                self.session.set_playing(true);
            }
            PlaybackPhase::Idle | PlaybackPhase::Playing | PlaybackPhase::Ended => {}
        }
    }

    /// Pause playback and flush progress
    ///
    /// Also raises the stop affordance flag for the surrounding surface.
    pub async fn pause(&mut self) {
        match self.transport.phase {
            PlaybackPhase::Playing => {
                if let Err(e) = self.device.pause() {
                    warn!(error = %e, "device rejected pause");
                }
                self.transport.phase = PlaybackPhase::Paused;
                self.session.set_playing(false);
                self.stop_affordance = true;
                self.flush_progress().await;
            }
            PlaybackPhase::Loading => {
                self.session.set_playing(false);
            }
            _ => {}
        }
    }

    /// Jump by a signed delta, clamped to `[0, duration]`
    pub fn seek_relative(&mut self, delta_seconds: f64) {
        if !matches!(
            self.transport.phase,
            PlaybackPhase::Playing | PlaybackPhase::Paused
        ) {
            return;
        }

        let target = (self.transport.position_seconds + delta_seconds)
            .clamp(0.0, self.transport.duration_seconds);
        match self.device.seek(target) {
            Ok(()) => self.transport.position_seconds = target,
            Err(e) => warn!(error = %e, target, "device rejected seek"),
        }
    }

    /// Skip forward by the configured step
    pub fn seek_forward(&mut self) {
        self.seek_relative(self.config.seek_step_seconds);
    }

    /// Skip back by the configured step
    pub fn seek_back(&mut self) {
        self.seek_relative(-self.config.seek_step_seconds);
    }

    /// Flip the device mute flag and mirror it into the transport
    ///
    /// Mute is device-level state: it survives track switches.
    pub fn toggle_mute(&mut self) {
        let muted = !self.transport.muted;
        if let Err(e) = self.device.set_muted(muted) {
            warn!(error = %e, "device rejected mute toggle");
            return;
        }
        self.transport.muted = muted;
    }

    /// Tear down the session
    ///
    /// Flushes progress, clears the selection (discarding in-flight device
    /// completions), and resets the transport. Invoked by the host on
    /// navigation events that must not keep stale playback context.
    pub async fn clear_session(&mut self) {
        self.flush_progress().await;
        self.session.clear();
        self.transport = TransportState {
            muted: self.transport.muted,
            ..TransportState::default()
        };
        self.stop_affordance = false;
    }

    /// Coalesced progress write for the current position
    async fn record_progress(&mut self) {
        let (Some(user), Some(track)) = (self.user.clone(), self.session.get().current) else {
            return;
        };
        if let Err(e) = self
            .persister
            .record(&user, &track, self.transport.position_seconds)
            .await
        {
            // Progress for this window is lost; playback is unaffected
            warn!(track = %track.id, error = %e, "progress write failed");
        }
    }

    /// Immediate progress write, bypassing the coalescing window
    async fn flush_progress(&mut self) {
        let (Some(user), Some(track)) = (self.user.clone(), self.session.get().current) else {
            return;
        };
        if let Err(e) = self
            .persister
            .flush(&user, &track, self.transport.position_seconds)
            .await
        {
            warn!(track = %track.id, error = %e, "progress flush failed");
        }
    }
}
