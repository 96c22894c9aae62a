use thiserror::Error;

#[derive(Debug, Error)]
#[error("share target unavailable: {0}")]
pub struct ShareError(pub String);

/// Native share capability of the hosting platform. Sharing is strictly
/// best-effort: a failing target is logged by the feed controller and
/// never surfaced to the viewer.
pub trait SharePlatform: Send + Sync {
    fn share(&self, title: &str, text: &str, url: &str) -> Result<(), ShareError>;
}

/// Default platform with no native share target; the counter increment is
/// the whole effect.
pub struct NoopShare;

impl SharePlatform for NoopShare {
    fn share(&self, _title: &str, _text: &str, _url: &str) -> Result<(), ShareError> {
        Ok(())
    }
}
