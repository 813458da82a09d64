use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    Open,
    UnderReview,
    Resolved,
    Rejected,
}

impl DisputeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisputeStatus::Open => "open",
            DisputeStatus::UnderReview => "under_review",
            DisputeStatus::Resolved => "resolved",
            DisputeStatus::Rejected => "rejected",
        }
    }
}

/// Dispute raised by a customer or provider against a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub id: RecordId,
    pub job_reference: String,
    pub raised_by: String,
    pub reason: String,
    pub status: DisputeStatus,
    #[serde(default)]
    pub resolution_note: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
