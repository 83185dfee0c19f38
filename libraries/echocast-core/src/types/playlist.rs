/// Playlist domain type
use crate::types::{PlaylistId, TrackId, UserId};
use serde::{Deserialize, Serialize};

/// Named, ordered track collection owned by a user
///
/// Membership is an ordered sequence that may contain duplicates: appends do
/// not deduplicate, callers pre-filter if they want set semantics. Ownership
/// checks happen in an outer authorization layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Owning user
    pub owner_id: UserId,

    /// Display name
    pub name: String,

    /// Ordered member track IDs
    pub track_ids: Vec<TrackId>,

    /// Unix timestamp (seconds) of creation
    pub created_at: i64,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(owner_id: UserId, name: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: PlaylistId::generate(),
            owner_id,
            name: name.into(),
            track_ids: Vec::new(),
            created_at,
        }
    }

    /// Whether the playlist already contains the track
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.track_ids.contains(track_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_playlist_is_empty() {
        let playlist = Playlist::new(UserId::new("u1"), "Morning Commute", 0);
        assert!(playlist.track_ids.is_empty());
        assert_eq!(playlist.name, "Morning Commute");
    }

    #[test]
    fn contains_member() {
        let mut playlist = Playlist::new(UserId::new("u1"), "Mix", 0);
        playlist.track_ids.push(TrackId::new("t1"));
        assert!(playlist.contains(&TrackId::new("t1")));
        assert!(!playlist.contains(&TrackId::new("t2")));
    }
}
