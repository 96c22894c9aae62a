//! Feed controller - one-screen-per-item vertical feed with a single
//! "active" video tracked against scroll position.
//!
//! Scroll events land here from the client; the active index follows
//! round(scroll_top / viewport_height) immediately, while a settle timer
//! holds playback back until the scroll stream has been quiet for the
//! configured window. The timer is an abort-and-respawn task: every scroll
//! event cancels the previous one, so the flag clears exactly once, after
//! the last event.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::feed::reducers;
use crate::feed::share::SharePlatform;
use crate::models::{PlaybackState, Video};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackControl {
    Play,
    Mute,
}

/// Point-in-time view of the feed handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub videos: Vec<Video>,
    pub playback: Vec<PlaybackState>,
    pub active_index: usize,
    pub is_scrolling: bool,
}

struct FeedState {
    videos: Vec<Video>,
    playback: Vec<PlaybackState>,
    active_index: usize,
    is_scrolling: bool,
    scroll_top: f64,
    viewport_height: f64,
}

pub struct FeedController {
    state: Arc<Mutex<FeedState>>,
    settle: Mutex<Option<JoinHandle<()>>>,
    settle_window: Duration,
    share: Arc<dyn SharePlatform>,
}

impl FeedController {
    pub fn new(
        videos: Vec<Video>,
        viewport_height: f64,
        settle_window: Duration,
        share: Arc<dyn SharePlatform>,
    ) -> Self {
        let playback = vec![PlaybackState::default(); videos.len()];
        Self {
            state: Arc::new(Mutex::new(FeedState {
                videos,
                playback,
                active_index: 0,
                is_scrolling: false,
                scroll_top: 0.0,
                viewport_height,
            })),
            settle: Mutex::new(None),
            settle_window,
            share,
        }
    }

    pub fn len(&self) -> usize {
        self.lock_state().videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn active_index(&self) -> usize {
        self.lock_state().active_index
    }

    pub fn is_scrolling(&self) -> bool {
        self.lock_state().is_scrolling
    }

    /// A video is active (eligible to play) only when it sits at the active
    /// index and the feed has settled.
    pub fn is_active(&self, index: usize) -> bool {
        let state = self.lock_state();
        index == state.active_index && !state.is_scrolling
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let state = self.lock_state();
        FeedSnapshot {
            videos: state.videos.clone(),
            playback: state.playback.clone(),
            active_index: state.active_index,
            is_scrolling: state.is_scrolling,
        }
    }

    /// Handle one scroll event: remap the active index from the new offset
    /// and restart the settle timer. Returns the active index.
    pub fn on_scroll(&self, scroll_top: f64) -> usize {
        let active_index = {
            let mut state = self.lock_state();
            state.scroll_top = scroll_top.max(0.0);
            state.is_scrolling = true;
            state.active_index =
                index_for_offset(state.scroll_top, state.viewport_height, state.videos.len());
            state.active_index
        };

        debug!(
            "scroll: top={:.0} active_index={} settling",
            scroll_top, active_index
        );
        self.restart_settle_timer();
        active_index
    }

    /// Keyboard navigation: one step per press, clamped at both ends. A
    /// boundary press is a no-op that does not scroll. A successful move
    /// scrolls the container programmatically, which re-enters the scroll
    /// handler exactly like a user-driven scroll.
    pub fn key_down(&self, key: NavKey) -> Option<usize> {
        let (target, viewport_height) = {
            let state = self.lock_state();
            let target = match key {
                NavKey::ArrowUp if state.active_index > 0 => Some(state.active_index - 1),
                NavKey::ArrowDown if state.active_index + 1 < state.videos.len() => {
                    Some(state.active_index + 1)
                }
                _ => None,
            };
            (target, state.viewport_height)
        };

        let target = target?;
        self.on_scroll(target as f64 * viewport_height);
        Some(target)
    }

    /// Flip the viewer's like on a video. Optimistic and local-only.
    pub fn toggle_like(&self, video_id: &str) -> Result<Video> {
        let mut state = self.lock_state();
        if !state.videos.iter().any(|v| v.id == video_id) {
            return Err(AppError::NotFound(format!("video {}", video_id)));
        }
        state.videos = reducers::toggle_like(&state.videos, video_id);
        Ok(find_video(&state.videos, video_id))
    }

    /// Record a share and best-effort invoke the platform share target.
    /// A failing target is logged and swallowed.
    pub fn share(&self, video_id: &str) -> Result<Video> {
        let shared = {
            let mut state = self.lock_state();
            if !state.videos.iter().any(|v| v.id == video_id) {
                return Err(AppError::NotFound(format!("video {}", video_id)));
            }
            state.videos = reducers::record_share(&state.videos, video_id);
            find_video(&state.videos, video_id)
        };

        let url = format!("/videos/{}", shared.id);
        if let Err(err) = self.share.share(&shared.title, &shared.description, &url) {
            warn!("platform share failed for {}: {}", shared.id, err);
        }
        Ok(shared)
    }

    /// Toggle play/pause or mute on one card.
    pub fn set_playback(&self, video_id: &str, control: PlaybackControl) -> Result<PlaybackState> {
        let mut state = self.lock_state();
        let index = state
            .videos
            .iter()
            .position(|v| v.id == video_id)
            .ok_or_else(|| AppError::NotFound(format!("video {}", video_id)))?;

        let card = &mut state.playback[index];
        match control {
            PlaybackControl::Play => card.is_playing = !card.is_playing,
            PlaybackControl::Mute => card.is_muted = !card.is_muted,
        }
        Ok(*card)
    }

    fn restart_settle_timer(&self) {
        let mut slot = self.settle.lock().expect("settle mutex poisoned");
        if let Some(handle) = slot.take() {
            handle.abort();
        }

        let state = Arc::clone(&self.state);
        let window = self.settle_window;
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            if let Ok(mut state) = state.lock() {
                state.is_scrolling = false;
            }
        }));
    }

    fn lock_state(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().expect("feed state mutex poisoned")
    }
}

impl Drop for FeedController {
    fn drop(&mut self) {
        // Do not leave the settle timer running past its consumer.
        if let Ok(mut slot) = self.settle.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}

fn index_for_offset(scroll_top: f64, viewport_height: f64, len: usize) -> usize {
    if len == 0 || viewport_height <= 0.0 {
        return 0;
    }
    let raw = (scroll_top / viewport_height).round();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(len - 1)
    }
}

fn find_video(videos: &[Video], video_id: &str) -> Video {
    videos
        .iter()
        .find(|v| v.id == video_id)
        .cloned()
        .expect("video checked present under the same lock")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_mapping_rounds_and_clamps() {
        assert_eq!(index_for_offset(0.0, 800.0, 5), 0);
        assert_eq!(index_for_offset(399.0, 800.0, 5), 0);
        assert_eq!(index_for_offset(401.0, 800.0, 5), 1);
        assert_eq!(index_for_offset(1920.0, 800.0, 5), 2);
        assert_eq!(index_for_offset(80_000.0, 800.0, 5), 4);
        assert_eq!(index_for_offset(-50.0, 800.0, 5), 0);
    }

    #[test]
    fn empty_feed_maps_to_index_zero() {
        assert_eq!(index_for_offset(1600.0, 800.0, 0), 0);
    }
}
