use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display-only comment attached to a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub avatar: String,
    pub video_id: String,
    pub content: String,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_liked: bool,
}
