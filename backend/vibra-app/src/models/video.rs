use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Video content unit as rendered by the feed and discover screens.
///
/// Counters are mutated locally through copy-on-write reducers; nothing is
/// reconciled with a server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub avatar: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    /// Duration in seconds.
    pub duration: u32,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub views: u64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Whether the current viewer has liked this video.
    #[serde(default)]
    pub is_liked: bool,
    /// VIBRA rewards accrued by this video.
    pub rewards: f64,
}

/// Per-card playback state tracked by the feed controller. Cards start
/// paused and muted; toggles are purely local.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_muted: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            is_muted: true,
        }
    }
}
