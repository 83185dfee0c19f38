//! Echocast Core
//!
//! Platform-agnostic core types, traits, and error handling for Echocast.
//!
//! This crate provides the foundational building blocks shared by the
//! storage and playback crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `TrackDescriptor`, `ProgressEntry`, `QueueEntry`, `Playlist`
//! - **Storage Traits**: `ProgressStore`, `TrackStore`, the narrow durable-store
//!   interfaces the playback layer consumes
//! - **Error Handling**: Unified `CastError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use echocast_core::types::{TrackDescriptor, TrackId, UserId};
//!
//! let track = TrackDescriptor::new("The Deep Dive", "https://cdn.example/audio/1.mp3", 1800.0);
//! assert_eq!(track.title, "The Deep Dive");
//!
//! let user = UserId::generate();
//! assert!(!user.as_str().is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CastError, Result};
pub use storage::{ProgressStore, TrackStore};

// Export all types
pub use types::{
    Playlist, PlaylistId, ProgressEntry, QueueEntry, TrackDescriptor, TrackId, UserId,
    COMPLETION_THRESHOLD,
};
