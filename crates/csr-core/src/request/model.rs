//! Request history models.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a customer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Processing,
    Resolved,
    Completed,
}

impl RequestStatus {
    /// Parse from string. Unknown values are treated as processing.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pending" => Self::Pending,
            "resolved" => Self::Resolved,
            "completed" => Self::Completed,
            _ => Self::Processing,
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "待处理",
            Self::Processing => "处理中",
            Self::Resolved => "已解决",
            Self::Completed => "已完成",
        }
    }

    /// Badge style: still open requests are highlighted.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            Self::Processing => "default",
            Self::Pending => "outline",
            Self::Resolved | Self::Completed => "secondary",
        }
    }
}

/// One handled customer request with its routing trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub id: String,
    pub customer: String,
    pub intent: String,
    pub status: RequestStatus,
    /// Hand-off trail, e.g. "售后组 -> 技术专家组".
    pub history: String,
    /// Agents pulled into the collaboration group.
    pub collaborators: String,
}
