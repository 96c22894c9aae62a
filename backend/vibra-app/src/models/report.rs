use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportContentType {
    Video,
    Comment,
    User,
}

impl ReportContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportContentType::Video => "video",
            ReportContentType::Comment => "comment",
            ReportContentType::User => "user",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Resolved,
    Dismissed,
}

impl ReportStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(ReportStatus::Pending),
            "resolved" => Some(ReportStatus::Resolved),
            "dismissed" => Some(ReportStatus::Dismissed),
            _ => None,
        }
    }
}

/// Moderator decision on a report. No audit trail is retained beyond the
/// status flip itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Resolve,
    Dismiss,
}

impl ModerationAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "resolve" => Some(ModerationAction::Resolve),
            "dismiss" => Some(ModerationAction::Dismiss),
            _ => None,
        }
    }

    pub fn resulting_status(&self) -> ReportStatus {
        match self {
            ModerationAction::Resolve => ReportStatus::Resolved,
            ModerationAction::Dismiss => ReportStatus::Dismissed,
        }
    }
}

/// Moderation ticket filed against a video, comment or user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub reporter_id: String,
    pub content_id: String,
    pub content_type: ReportContentType,
    pub reason: String,
    pub description: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}
