//! Moderation queue: the mutable view over the fixed report set.
//!
//! Report statuses flip through copy-on-write updates, matching the feed's
//! mutation style; no audit trail is kept beyond the status itself.

use serde::Serialize;
use std::sync::RwLock;
use tracing::info;

use crate::data;
use crate::error::{AppError, Result};
use crate::models::{
    Comment, ModerationAction, Report, ReportContentType, ReportStatus, Video,
};

/// Flagged-content count surfaced on the dashboard. The automated scanning
/// pipeline that would produce it is out of scope.
pub const FLAGGED_CONTENT: u64 = 3;
/// Display-only community safety score.
pub const SAFETY_SCORE: f64 = 98.5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationStats {
    pub pending_reports: usize,
    pub resolved_reports: usize,
    pub flagged_content: u64,
    pub safety_score: f64,
}

/// Preview of the content a report points at, for the review card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ReportedContent {
    Video { video: Video },
    Comment { comment: Comment },
    User { user_id: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    #[serde(flatten)]
    pub report: Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ReportedContent>,
}

pub struct ModerationQueue {
    reports: RwLock<Vec<Report>>,
}

impl ModerationQueue {
    pub fn new(seed: Vec<Report>) -> Self {
        Self {
            reports: RwLock::new(seed),
        }
    }

    pub fn from_dataset() -> Self {
        Self::new(data::MOCK_REPORTS.clone())
    }

    /// Reports, optionally filtered by status, enriched for display.
    pub fn reports(&self, status: Option<ReportStatus>) -> Vec<ReportView> {
        self.read()
            .iter()
            .filter(|r| status.map(|s| r.status == s).unwrap_or(true))
            .map(|r| enrich(r.clone()))
            .collect()
    }

    /// Apply a moderator decision to a report. Unknown ids are the only
    /// failure; re-deciding an already-handled report just flips it again.
    pub fn apply(&self, report_id: &str, action: ModerationAction) -> Result<ReportView> {
        let mut reports = self.write();

        if !reports.iter().any(|r| r.id == report_id) {
            return Err(AppError::NotFound(format!("report {}", report_id)));
        }

        let next: Vec<Report> = reports
            .iter()
            .map(|r| {
                if r.id == report_id {
                    let mut updated = r.clone();
                    updated.status = action.resulting_status();
                    updated
                } else {
                    r.clone()
                }
            })
            .collect();
        *reports = next;

        let updated = reports
            .iter()
            .find(|r| r.id == report_id)
            .cloned()
            .expect("report checked present under the same lock");

        info!("report {} handled: {:?}", report_id, updated.status);
        Ok(enrich(updated))
    }

    pub fn stats(&self) -> ModerationStats {
        let reports = self.read();
        ModerationStats {
            pending_reports: reports
                .iter()
                .filter(|r| r.status == ReportStatus::Pending)
                .count(),
            resolved_reports: reports
                .iter()
                .filter(|r| r.status == ReportStatus::Resolved)
                .count(),
            flagged_content: FLAGGED_CONTENT,
            safety_score: SAFETY_SCORE,
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Report>> {
        self.reports.read().expect("moderation lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Report>> {
        self.reports.write().expect("moderation lock poisoned")
    }
}

fn enrich(report: Report) -> ReportView {
    let reporter_username = data::MOCK_USERS
        .iter()
        .find(|u| u.id == report.reporter_id)
        .map(|u| u.username.clone());

    let content = match report.content_type {
        ReportContentType::Video => data::MOCK_VIDEOS
            .iter()
            .find(|v| v.id == report.content_id)
            .map(|v| ReportedContent::Video { video: v.clone() }),
        ReportContentType::Comment => data::MOCK_COMMENTS
            .iter()
            .find(|c| c.id == report.content_id)
            .map(|c| ReportedContent::Comment { comment: c.clone() }),
        ReportContentType::User => Some(ReportedContent::User {
            user_id: report.content_id.clone(),
        }),
    };

    ReportView {
        report,
        reporter_username,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_flips_only_the_target_report() {
        let queue = ModerationQueue::from_dataset();
        let before = queue.stats();

        let view = queue.apply("report-4001", ModerationAction::Resolve).unwrap();
        assert_eq!(view.report.status, ReportStatus::Resolved);

        let after = queue.stats();
        assert_eq!(after.pending_reports, before.pending_reports - 1);
        assert_eq!(after.resolved_reports, before.resolved_reports + 1);
    }

    #[test]
    fn dismiss_moves_a_report_out_of_pending() {
        let queue = ModerationQueue::from_dataset();
        queue.apply("report-4002", ModerationAction::Dismiss).unwrap();

        let pending = queue.reports(Some(ReportStatus::Pending));
        assert!(pending.iter().all(|v| v.report.id != "report-4002"));
    }

    #[test]
    fn unknown_report_is_not_found() {
        let queue = ModerationQueue::from_dataset();
        let err = queue
            .apply("report-none", ModerationAction::Resolve)
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn views_join_reporter_and_content() {
        let queue = ModerationQueue::from_dataset();
        let pending = queue.reports(Some(ReportStatus::Pending));

        let video_report = pending
            .iter()
            .find(|v| v.report.id == "report-4001")
            .unwrap();
        assert_eq!(video_report.reporter_username.as_deref(), Some("blockbeats"));
        assert!(matches!(
            video_report.content,
            Some(ReportedContent::Video { .. })
        ));
    }
}
