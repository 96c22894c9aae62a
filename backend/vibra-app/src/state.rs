use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::data;
use crate::feed::{FeedController, NoopShare};
use crate::services::{ModerationQueue, UploadManager, WalletService};
use crate::session::SessionStore;

/// Process-wide application state.
///
/// The session store and the feed controller are the only two mutable
/// state containers; everything else reads the fixed dataset. One
/// AppState per process mirrors the one-browser-tab model of the UI this
/// service drives.
pub struct AppState {
    pub config: Config,
    pub session: Arc<SessionStore>,
    pub feed: Arc<FeedController>,
    pub moderation: Arc<ModerationQueue>,
    pub wallet: WalletService,
    pub uploads: Arc<UploadManager>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session = Arc::new(SessionStore::open(
            config.session.store_path.clone(),
            Duration::from_millis(config.session.simulated_latency_ms),
        ));

        let feed = Arc::new(FeedController::new(
            data::MOCK_VIDEOS.clone(),
            config.feed.viewport_height,
            Duration::from_millis(config.feed.settle_ms),
            Arc::new(NoopShare),
        ));

        let moderation = Arc::new(ModerationQueue::from_dataset());
        let wallet = WalletService::new(config.wallet.clone());
        let uploads = Arc::new(UploadManager::new(config.upload.clone()));

        Self {
            config,
            session,
            feed,
            moderation,
            wallet,
            uploads,
        }
    }
}
