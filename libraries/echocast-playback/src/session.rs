//! Process-wide playback session store
//!
//! The single source of truth for "what is playing and should it be
//! playing". All surfaces read from and write to this store; the playback
//! engine reacts to its changes. Replaces ambient global state with an
//! explicit, constructed object whose lifecycle the host controls.

use echocast_core::types::TrackDescriptor;
use serde::{Deserialize, Serialize};

/// The current track selection and play/pause intent
///
/// Invariant: `current == None` implies `playing == false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The selected track, if any
    pub current: Option<TrackDescriptor>,

    /// Whether playback is intended to be running
    pub playing: bool,
}

/// Handle returned by [`SessionStore::observe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owner of the process-wide [`Session`]
///
/// Changes apply atomically: state is fully updated before any observer
/// runs, so a subscriber can never see a torn update (track replaced but
/// intent not yet flipped). Observers are invoked synchronously with a
/// shared borrow of the new state; re-entrant mutation during notification
/// is ruled out by the borrow checker; queue follow-up work for the next
/// scheduling turn instead.
///
/// Every change of track identity (selection or clear) bumps a generation
/// counter. Asynchronous device completions are tagged with the generation
/// current when they were issued and discarded if the session has moved on.
pub struct SessionStore {
    state: Session,
    generation: u64,
    observers: Vec<(SubscriptionId, Box<dyn Fn(&Session) + Send>)>,
    next_subscription: u64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create an empty store: nothing selected, not playing
    pub fn new() -> Self {
        Self {
            state: Session::default(),
            generation: 0,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Snapshot of the current session
    pub fn get(&self) -> Session {
        self.state.clone()
    }

    /// Generation of the current track identity
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the selection and set the intent to playing
    ///
    /// Every selection is a fresh load, even of the already-current track,
    /// so the generation always advances. Returns the new generation for
    /// tagging device operations.
    pub fn set_current_track(&mut self, track: TrackDescriptor) -> u64 {
        self.generation += 1;
        self.state.current = Some(track);
        self.state.playing = true;
        self.notify();
        self.generation
    }

    /// Drop the selection and stop
    ///
    /// Invoked by the host on navigation events that must not keep stale
    /// playback context (e.g. entering an authoring flow). Bumps the
    /// generation so in-flight device completions for the cleared track are
    /// discarded.
    pub fn clear(&mut self) -> u64 {
        self.generation += 1;
        self.state.current = None;
        self.state.playing = false;
        self.notify();
        self.generation
    }

    /// Update the play/pause intent without touching the selection
    ///
    /// No-op when nothing is selected (the invariant keeps `playing` false)
    /// or when the intent already matches.
    pub fn set_playing(&mut self, playing: bool) {
        if self.state.current.is_none() || self.state.playing == playing {
            return;
        }
        self.state.playing = playing;
        self.notify();
    }

    /// Register an observer invoked synchronously on every state change
    pub fn observe(&mut self, callback: impl Fn(&Session) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Remove an observer; returns whether it was registered
    pub fn unobserve(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&self) {
        for (_, callback) in &self.observers {
            callback(&self.state);
        }
    }
}
