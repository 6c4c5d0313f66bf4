//! Skill group and staff domain models.

use serde::{Deserialize, Serialize};

use crate::rule::{Record, RuleFields};

/// A skill group and its ordered member list.
pub type SkillGroup = Record<SkillGroupFields>;

/// Editable fields of a skill group. Name and at least one member are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroupFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl SkillGroupFields {
    /// Build fields from a comma-separated member list.
    ///
    /// Both ASCII and full-width commas separate members.
    pub fn from_member_text(name: &str, members: &str) -> Self {
        Self {
            name: name.to_string(),
            members: members
                .split([',', '，'])
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    /// Members joined for display and for the edit form.
    pub fn member_text(&self) -> String {
        self.members.join(", ")
    }
}

impl RuleFields for SkillGroupFields {
    const KIND: &'static str = "skill group";

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.members = self
            .members
            .iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
    }

    fn first_blank(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.members.iter().all(|m| m.trim().is_empty()) {
            Some("members")
        } else {
            None
        }
    }
}

/// Agent presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatus {
    Online,
    Offline,
}

impl StaffStatus {
    /// Badge text shown in the roster.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "在线",
            Self::Offline => "离线",
        }
    }
}

/// A customer-service agent. Read-only in the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    /// Name of the skill group the agent belongs to.
    pub group: String,
    pub status: StaffStatus,
}

/// Staff entry with its group checked against the live group collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffAssignment {
    pub staff: Staff,
    /// `None` when the referenced group has been deleted.
    pub group: Option<String>,
}
