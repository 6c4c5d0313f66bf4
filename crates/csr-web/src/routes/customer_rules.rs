//! Customer rule page and the assignment lookup.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use csr_core::customer::{self, CustomerFields, CustomerRule, LookupResult};
use csr_core::navigation::Page;

use super::rules::RulePage;
use crate::state::{AppState, SharedRepository, ToastKind};
use crate::views::{self, FormField, Shell};

pub struct CustomerRules;

impl RulePage for CustomerRules {
    type Fields = CustomerFields;
    type Form = CustomerFields;

    const PAGE: Page = Page::CustomerRules;
    const CREATE_TITLE: &'static str = "新增客户规则";
    const EDIT_TITLE: &'static str = "编辑客户规则";
    const CREATE_SUBMIT: &'static str = "保存规则";
    const EDIT_SUBMIT: &'static str = "保存更新";
    const CREATED: &'static str = "规则已添加";
    const UPDATED: &'static str = "规则已更新";
    const DELETED: &'static str = "客户规则已删除";

    fn repository(state: &AppState) -> &SharedRepository<CustomerFields> {
        &state.customers
    }

    fn into_fields(form: CustomerFields) -> CustomerFields {
        form
    }

    fn form_fields(fields: &CustomerFields) -> Vec<FormField> {
        vec![
            FormField::input("customerId", "客户标识 (ID或名称)", fields.customer_id.as_str()),
            FormField::input("binding", "绑定客服/技能组", fields.binding.as_str())
                .with_placeholder("输入客服姓名或技能组名称"),
            FormField::textarea("description", "规则描述", fields.description.as_str(), 3),
        ]
    }
}

#[derive(Template)]
#[template(path = "customer_rules.html")]
struct CustomerRulesTemplate {
    shell: Shell,
    rules: Vec<CustomerRule>,
    query: String,
    lookup: Option<LookupResult>,
}

#[derive(Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /customer-rules
pub async fn index(State(state): State<AppState>) -> Response {
    render_page(&state, String::new(), None, StatusCode::OK).await
}

/// GET /customer-rules/lookup?q= - Who is serving this customer.
pub async fn lookup(State(state): State<AppState>, Query(params): Query<LookupQuery>) -> Response {
    match customer::lookup(state.lookup.as_ref(), &params.q) {
        Ok(result) => {
            state.notify(ToastKind::Success, "查询成功");
            render_page(&state, params.q, Some(result), StatusCode::OK).await
        }
        Err(_) => {
            state.notify(ToastKind::Error, "请输入查询内容");
            render_page(&state, params.q, None, StatusCode::UNPROCESSABLE_ENTITY).await
        }
    }
}

async fn render_page(state: &AppState, query: String, lookup: Option<LookupResult>, status: StatusCode) -> Response {
    let rules = state.customers.read().await.list();
    let template = CustomerRulesTemplate {
        shell: state.shell(Page::CustomerRules).await,
        rules,
        query,
        lookup,
    };
    views::render_with_status(status, &template)
}
