/// Track descriptor domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// Metadata for a playable track
///
/// Immutable once loaded into a session; the authoritative copy lives in
/// track metadata storage. Carries everything a playback surface needs to
/// render and drive the track without further lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// URL of the audio media
    pub media_url: String,

    /// URL of the cover image (optional)
    pub image_url: Option<String>,

    /// Display label for the author/creator
    pub author: String,

    /// Total duration in seconds
    pub duration_seconds: f64,
}

impl TrackDescriptor {
    /// Create a new descriptor with minimal metadata
    pub fn new(
        title: impl Into<String>,
        media_url: impl Into<String>,
        duration_seconds: f64,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            media_url: media_url.into(),
            image_url: None,
            author: String::new(),
            duration_seconds,
        }
    }

    /// Position (seconds) at or beyond which the track counts as finished
    pub fn completion_cutoff(&self) -> f64 {
        self.duration_seconds * crate::types::COMPLETION_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = TrackDescriptor::new("Test Episode", "https://cdn.example/1.mp3", 1800.0);
        assert_eq!(track.title, "Test Episode");
        assert_eq!(track.media_url, "https://cdn.example/1.mp3");
        assert!(track.image_url.is_none());
    }

    #[test]
    fn completion_cutoff_at_ninety_percent() {
        let track = TrackDescriptor::new("Episode", "https://cdn.example/1.mp3", 100.0);
        assert_eq!(track.completion_cutoff(), 90.0);
    }
}
