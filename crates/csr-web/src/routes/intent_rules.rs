//! Intent rule page.

use askama::Template;
use axum::{extract::State, response::Response};

use csr_core::intent::{IntentFields, IntentRule};
use csr_core::navigation::Page;

use super::rules::RulePage;
use crate::state::{AppState, SharedRepository};
use crate::views::{self, FormField, Shell};

pub struct IntentRules;

impl RulePage for IntentRules {
    type Fields = IntentFields;
    type Form = IntentFields;

    const PAGE: Page = Page::IntentRules;
    const CREATE_TITLE: &'static str = "新增意图规则";
    const EDIT_TITLE: &'static str = "编辑意图规则";
    const CREATE_SUBMIT: &'static str = "保存";
    const EDIT_SUBMIT: &'static str = "保存更新";
    const CREATED: &'static str = "规则已添加";
    const UPDATED: &'static str = "规则已更新";
    const DELETED: &'static str = "规则已删除";

    fn repository(state: &AppState) -> &SharedRepository<IntentFields> {
        &state.intents
    }

    fn into_fields(form: IntentFields) -> IntentFields {
        form
    }

    fn form_fields(fields: &IntentFields) -> Vec<FormField> {
        vec![
            FormField::textarea("question", "客户原始问题", fields.question.as_str(), 3),
            FormField::input("department", "转接部门 (意图)", fields.department.as_str()),
            FormField::input("action", "对应动作", fields.action.as_str()),
            FormField::textarea("purpose", "客户目的 (AI训练)", fields.purpose.as_str(), 2),
        ]
    }
}

#[derive(Template)]
#[template(path = "intent_rules.html")]
struct IntentRulesTemplate {
    shell: Shell,
    rules: Vec<IntentRule>,
}

/// GET /intent-rules
pub async fn index(State(state): State<AppState>) -> Response {
    let rules = state.intents.read().await.list();
    let template = IntentRulesTemplate {
        shell: state.shell(Page::IntentRules).await,
        rules,
    };
    views::render(&template)
}
