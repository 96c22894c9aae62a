//! Copy-on-write reducers over the feed's video list.
//!
//! Every mutation returns a new list keyed by id instead of editing in
//! place; the controller swaps the whole list under its lock. Counter and
//! flag changes for one video land in a single pass, so a reader never
//! observes a half-applied update.

use crate::models::Video;

/// Flip the viewer's like on one video, adjusting its like counter in the
/// same update.
pub fn toggle_like(videos: &[Video], video_id: &str) -> Vec<Video> {
    videos
        .iter()
        .map(|video| {
            if video.id == video_id {
                let mut updated = video.clone();
                if updated.is_liked {
                    updated.likes = updated.likes.saturating_sub(1);
                } else {
                    updated.likes += 1;
                }
                updated.is_liked = !updated.is_liked;
                updated
            } else {
                video.clone()
            }
        })
        .collect()
}

/// Record one share of a video.
pub fn record_share(videos: &[Video], video_id: &str) -> Vec<Video> {
    videos
        .iter()
        .map(|video| {
            if video.id == video_id {
                let mut updated = video.clone();
                updated.shares += 1;
                updated
            } else {
                video.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn toggle_like_twice_restores_original_state() {
        let videos = data::MOCK_VIDEOS.clone();
        let original = videos[0].clone();

        let once = toggle_like(&videos, &original.id);
        assert_eq!(once[0].likes, original.likes + 1);
        assert!(once[0].is_liked);

        let twice = toggle_like(&once, &original.id);
        assert_eq!(twice[0].likes, original.likes);
        assert_eq!(twice[0].is_liked, original.is_liked);
    }

    #[test]
    fn toggle_like_leaves_other_videos_untouched() {
        let videos = data::MOCK_VIDEOS.clone();
        let updated = toggle_like(&videos, &videos[1].id);
        assert_eq!(updated[0].likes, videos[0].likes);
        assert_eq!(updated[2].likes, videos[2].likes);
    }

    #[test]
    fn unlike_at_zero_does_not_underflow() {
        let mut videos = data::MOCK_VIDEOS.clone();
        videos[0].likes = 0;
        videos[0].is_liked = true;
        let updated = toggle_like(&videos, &videos[0].id);
        assert_eq!(updated[0].likes, 0);
        assert!(!updated[0].is_liked);
    }

    #[test]
    fn record_share_increments_only_the_target() {
        let videos = data::MOCK_VIDEOS.clone();
        let updated = record_share(&videos, &videos[2].id);
        assert_eq!(updated[2].shares, videos[2].shares + 1);
        assert_eq!(updated[0].shares, videos[0].shares);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let videos = data::MOCK_VIDEOS.clone();
        let updated = toggle_like(&videos, "video-none");
        for (before, after) in videos.iter().zip(updated.iter()) {
            assert_eq!(before.likes, after.likes);
            assert_eq!(before.is_liked, after.is_liked);
        }
    }
}
