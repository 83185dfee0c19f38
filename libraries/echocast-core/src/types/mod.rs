//! Domain types for Echocast

mod ids;
mod playlist;
mod progress;
mod queue;
mod track;

pub use ids::{PlaylistId, TrackId, UserId};
pub use playlist::Playlist;
pub use progress::{ProgressEntry, COMPLETION_THRESHOLD};
pub use queue::QueueEntry;
pub use track::TrackDescriptor;
