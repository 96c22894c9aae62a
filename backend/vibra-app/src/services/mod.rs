pub mod admin;
pub mod discover;
pub mod moderation;
pub mod simulate;
pub mod upload;
pub mod wallet;

pub use moderation::ModerationQueue;
pub use upload::UploadManager;
pub use wallet::WalletService;
