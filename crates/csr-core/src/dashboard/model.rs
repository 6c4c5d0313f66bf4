//! Dashboard models.

use serde::{Deserialize, Serialize};

use crate::request::RequestStatus;

/// Colour family of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Warning,
    Success,
    Indigo,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Primary => "tone-primary",
            Self::Warning => "tone-warning",
            Self::Success => "tone-success",
            Self::Indigo => "tone-indigo",
        }
    }
}

/// A headline metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
    pub tone: Tone,
}

/// A recent routing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: String,
    pub customer: String,
    pub intent: String,
    pub assigned_to: String,
    /// Relative time, already formatted.
    pub time: String,
    pub status: RequestStatus,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: Vec<DashboardStat>,
    pub recent_allocations: Vec<Allocation>,
}
