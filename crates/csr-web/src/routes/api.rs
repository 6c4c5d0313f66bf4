//! Read-only JSON API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use csr_core::customer::{self, CustomerRule, LookupResult};
use csr_core::dashboard::{self, Dashboard};
use csr_core::group::{SkillGroup, Staff};
use csr_core::intent::IntentRule;
use csr_core::request::RequestRecord;
use csr_core::session::Session;

use super::customer_rules::LookupQuery;
use super::request_history::SearchQuery;
use crate::state::AppState;

pub async fn get_session(State(state): State<AppState>) -> Json<Session> {
    Json(state.session.read().await.current_session())
}

pub async fn list_intent_rules(State(state): State<AppState>) -> Json<Vec<IntentRule>> {
    Json(state.intents.read().await.list())
}

pub async fn list_customer_rules(State(state): State<AppState>) -> Json<Vec<CustomerRule>> {
    Json(state.customers.read().await.list())
}

pub async fn lookup_customer(
    State(state): State<AppState>,
    Query(params): Query<LookupQuery>,
) -> Result<Json<LookupResult>, (StatusCode, String)> {
    customer::lookup(state.lookup.as_ref(), &params.q)
        .map(Json)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}

pub async fn list_groups(State(state): State<AppState>) -> Json<Vec<SkillGroup>> {
    Json(state.groups.read().await.list())
}

pub async fn list_staff(State(state): State<AppState>) -> Json<Vec<Staff>> {
    Json(state.staff.list_staff().to_vec())
}

pub async fn list_requests(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<RequestRecord>> {
    Json(state.requests.search(state.search.as_ref(), &params.q))
}

pub async fn get_dashboard() -> Json<Dashboard> {
    Json(dashboard::snapshot())
}
