//! Simulated upload pipeline.
//!
//! An accepted draft becomes a background task that walks a progress
//! percentage to 100 over fixed ticks. The task is held behind a handle
//! that aborts on cancel or drop, so closing the upload dialog tears the
//! simulation down instead of letting the timers run to completion in the
//! background.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;
use validator::Validate;

use crate::config::UploadConfig;
use crate::error::{AppError, Result};
use crate::util::ids;
use crate::validators;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    /// Comma-separated tag field as typed into the form.
    #[serde(default)]
    pub tags: String,
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadStatus {
    pub id: String,
    pub title: String,
    pub progress: u8,
    pub done: bool,
}

struct UploadTask {
    title: String,
    progress: watch::Receiver<u8>,
    handle: JoinHandle<()>,
}

impl UploadTask {
    fn status(&self, id: &str) -> UploadStatus {
        let progress = *self.progress.borrow();
        UploadStatus {
            id: id.to_string(),
            title: self.title.clone(),
            progress,
            done: progress >= 100,
        }
    }
}

impl Drop for UploadTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct UploadManager {
    config: UploadConfig,
    tasks: DashMap<String, UploadTask>,
}

impl UploadManager {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            config,
            tasks: DashMap::new(),
        }
    }

    /// Validate a draft and start its simulated processing. The pipeline
    /// always succeeds; only validation can reject an upload.
    pub fn start(&self, request: UploadRequest) -> Result<UploadStatus> {
        request.validate()?;

        let tags = validators::normalize_tags(&request.tags);
        let id = ids::next_id("upload");
        let steps = self.config.progress_steps.max(1);
        let interval = Duration::from_millis(self.config.step_interval_ms);

        let (tx, rx) = watch::channel(0u8);
        let handle = tokio::spawn(async move {
            for step in 1..=steps {
                tokio::time::sleep(interval).await;
                let pct = ((step * 100) / steps) as u8;
                if tx.send(pct).is_err() {
                    return;
                }
            }
        });

        info!(
            "upload started: id={} title={:?} file={} tags={:?}",
            id, request.title, request.file_name, tags
        );

        let task = UploadTask {
            title: request.title,
            progress: rx,
            handle,
        };
        let status = task.status(&id);
        self.tasks.insert(id, task);
        Ok(status)
    }

    pub fn progress(&self, id: &str) -> Result<UploadStatus> {
        self.tasks
            .get(id)
            .map(|task| task.status(id))
            .ok_or_else(|| AppError::NotFound(format!("upload {}", id)))
    }

    /// Cancel an in-flight upload; the simulation is aborted, not drained.
    pub fn cancel(&self, id: &str) -> Result<()> {
        let Some(_removed) = self.tasks.remove(id) else {
            return Err(AppError::NotFound(format!("upload {}", id)));
        };
        info!("upload cancelled: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> UploadManager {
        UploadManager::new(UploadConfig {
            progress_steps: 4,
            step_interval_ms: 10,
        })
    }

    fn draft() -> UploadRequest {
        UploadRequest {
            title: "Gas fees in 30 seconds".to_string(),
            description: String::new(),
            tags: "crypto, Gas".to_string(),
            file_name: "gas.mp4".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn upload_progress_reaches_completion() {
        let uploads = manager();
        let started = uploads.start(draft()).unwrap();
        assert_eq!(started.progress, 0);

        tokio::time::sleep(Duration::from_millis(25)).await;
        let midway = uploads.progress(&started.id).unwrap();
        assert!(midway.progress > 0 && midway.progress < 100);

        tokio::time::sleep(Duration::from_millis(100)).await;
        let finished = uploads.progress(&started.id).unwrap();
        assert_eq!(finished.progress, 100);
        assert!(finished.done);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_tears_the_simulation_down() {
        let uploads = manager();
        let started = uploads.start(draft()).unwrap();

        tokio::time::sleep(Duration::from_millis(15)).await;
        uploads.cancel(&started.id).unwrap();

        assert!(matches!(
            uploads.progress(&started.id),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            uploads.cancel(&started.id),
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn untitled_draft_is_rejected() {
        let uploads = manager();
        let mut request = draft();
        request.title = String::new();
        assert!(matches!(
            uploads.start(request),
            Err(AppError::Validation(_))
        ));
    }
}
