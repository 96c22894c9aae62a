pub mod controller;
pub mod reducers;
pub mod share;

pub use controller::{FeedController, FeedSnapshot, NavKey, PlaybackControl};
pub use share::{NoopShare, SharePlatform};
