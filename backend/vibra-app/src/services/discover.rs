//! Discover screen: search and category orderings over the fixed video
//! set, plus the static trending-tags rail.

use serde::{Deserialize, Serialize};

use crate::models::Video;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscoverCategory {
    #[default]
    Trending,
    New,
    Popular,
    #[serde(rename = "liked")]
    MostLiked,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendingTag {
    pub tag: &'static str,
    pub count: u64,
}

pub const TRENDING_TAGS: &[TrendingTag] = &[
    TrendingTag { tag: "bitcoin", count: 1234 },
    TrendingTag { tag: "nft", count: 892 },
    TrendingTag { tag: "defi", count: 756 },
    TrendingTag { tag: "crypto", count: 2143 },
    TrendingTag { tag: "trading", count: 687 },
    TrendingTag { tag: "blockchain", count: 543 },
];

/// Case-insensitive search over title, description and tags, ordered by
/// the selected category. An empty query matches everything.
pub fn search(videos: &[Video], query: &str, category: DiscoverCategory) -> Vec<Video> {
    let needle = query.trim().to_lowercase();

    let mut hits: Vec<Video> = videos
        .iter()
        .filter(|video| {
            needle.is_empty()
                || video.title.to_lowercase().contains(&needle)
                || video.description.to_lowercase().contains(&needle)
                || video
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    match category {
        DiscoverCategory::Trending => hits.sort_by(|a, b| b.views.cmp(&a.views)),
        DiscoverCategory::New => hits.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        DiscoverCategory::Popular => hits.sort_by(|a, b| b.shares.cmp(&a.shares)),
        DiscoverCategory::MostLiked => hits.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }
    hits
}
