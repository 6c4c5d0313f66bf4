//! Request history page.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;

use csr_core::navigation::Page;
use csr_core::request::RequestRecord;

use crate::state::AppState;
use crate::views::{self, Shell};

#[derive(Template)]
#[template(path = "request_history.html")]
struct RequestHistoryTemplate {
    shell: Shell,
    query: String,
    requests: Vec<RequestRecord>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /request-history?q=
pub async fn index(State(state): State<AppState>, Query(params): Query<SearchQuery>) -> Response {
    let requests = state.requests.search(state.search.as_ref(), &params.q);
    let template = RequestHistoryTemplate {
        shell: state.shell(Page::RequestHistory).await,
        query: params.q,
        requests,
    };
    views::render(&template)
}
