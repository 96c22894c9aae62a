use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub session: SessionConfig,
    pub feed: FeedConfig,
    pub wallet: WalletConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Location of the single persisted session record.
    pub store_path: PathBuf,
    /// Artificial delay applied to every auth operation for realism.
    pub simulated_latency_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Quiet window after the last scroll event before the feed counts as
    /// settled. The observed behavior this app reproduces uses 150ms.
    pub settle_ms: u64,
    /// Height of one feed card in pixels; every card fills the viewport.
    pub viewport_height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    pub min_withdrawal: f64,
    pub withdrawal_fee: f64,
    /// Display-only VIBRA to USD rate.
    pub usd_rate: f64,
    pub processing_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Number of progress increments the simulated pipeline emits.
    pub progress_steps: u32,
    pub step_interval_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                port: std::env::var("APP_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()?,
                log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            session: SessionConfig {
                store_path: std::env::var("SESSION_STORE_PATH")
                    .unwrap_or_else(|_| "./data/vibra_user.json".to_string())
                    .into(),
                simulated_latency_ms: std::env::var("SESSION_LATENCY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(default_session_latency_ms),
            },
            feed: FeedConfig {
                settle_ms: std::env::var("FEED_SETTLE_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(default_feed_settle_ms),
                viewport_height: std::env::var("FEED_VIEWPORT_HEIGHT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(default_viewport_height),
            },
            wallet: WalletConfig {
                min_withdrawal: std::env::var("WALLET_MIN_WITHDRAWAL")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10.0),
                withdrawal_fee: std::env::var("WALLET_WITHDRAWAL_FEE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(2.0),
                usd_rate: std::env::var("WALLET_USD_RATE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0.85),
                processing_delay_ms: std::env::var("WALLET_PROCESSING_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(2000),
            },
            upload: UploadConfig {
                progress_steps: std::env::var("UPLOAD_PROGRESS_STEPS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
                step_interval_ms: std::env::var("UPLOAD_STEP_INTERVAL_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(120),
            },
        })
    }
}

fn default_session_latency_ms() -> u64 {
    400
}

fn default_feed_settle_ms() -> u64 {
    150
}

fn default_viewport_height() -> f64 {
    800.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_observed_timings() {
        assert_eq!(default_feed_settle_ms(), 150);
        assert!(default_viewport_height() > 0.0);
    }
}
