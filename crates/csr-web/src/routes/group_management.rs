//! Skill group page and the staff roster.

use askama::Template;
use axum::{extract::State, response::Response};
use serde::Deserialize;

use csr_core::group::{SkillGroup, SkillGroupFields, StaffAssignment};
use csr_core::navigation::Page;

use super::rules::RulePage;
use crate::state::{AppState, SharedRepository};
use crate::views::{self, FormField, Shell};

pub struct GroupManagement;

/// Group form body; members arrive as comma-separated text.
#[derive(Deserialize)]
pub struct GroupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: String,
}

impl RulePage for GroupManagement {
    type Fields = SkillGroupFields;
    type Form = GroupForm;

    const PAGE: Page = Page::GroupManagement;
    const CREATE_TITLE: &'static str = "新增技能组";
    const EDIT_TITLE: &'static str = "管理成员";
    const CREATE_SUBMIT: &'static str = "保存";
    const EDIT_SUBMIT: &'static str = "保存更新";
    const CREATED: &'static str = "技能组已添加";
    const UPDATED: &'static str = "技能组已更新";
    const DELETED: &'static str = "技能组已删除";

    fn repository(state: &AppState) -> &SharedRepository<SkillGroupFields> {
        &state.groups
    }

    fn into_fields(form: GroupForm) -> SkillGroupFields {
        SkillGroupFields::from_member_text(&form.name, &form.members)
    }

    fn form_fields(fields: &SkillGroupFields) -> Vec<FormField> {
        vec![
            FormField::input("name", "技能组名称", fields.name.as_str()),
            FormField::textarea("members", "组成员", fields.member_text(), 2)
                .with_placeholder("多个成员用逗号分隔"),
        ]
    }
}

/// Roster row with the badge and group text resolved.
struct StaffRow {
    name: String,
    group: String,
    orphaned: bool,
    status_label: &'static str,
    online: bool,
}

impl StaffRow {
    fn from_assignment(assignment: StaffAssignment) -> Self {
        let online = assignment.staff.status == csr_core::group::StaffStatus::Online;
        Self {
            status_label: assignment.staff.status.label(),
            orphaned: assignment.group.is_none(),
            group: assignment.group.unwrap_or_else(|| "未分配".to_string()),
            name: assignment.staff.name,
            online,
        }
    }
}

#[derive(Template)]
#[template(path = "group_management.html")]
struct GroupManagementTemplate {
    shell: Shell,
    groups: Vec<SkillGroup>,
    staff: Vec<StaffRow>,
    online: usize,
}

/// GET /group-management
pub async fn index(State(state): State<AppState>) -> Response {
    let groups = state.groups.read().await.list();
    let staff = state
        .staff
        .assignments(&groups)
        .into_iter()
        .map(StaffRow::from_assignment)
        .collect();

    let template = GroupManagementTemplate {
        shell: state.shell(Page::GroupManagement).await,
        groups,
        staff,
        online: state.staff.online_count(),
    };
    views::render(&template)
}
