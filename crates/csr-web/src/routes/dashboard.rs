//! Dashboard route handler.

use askama::Template;
use axum::{extract::State, response::Response};

use csr_core::dashboard::{self, Dashboard};
use csr_core::navigation::Page;

use crate::state::AppState;
use crate::views::{self, Shell};

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    shell: Shell,
    dashboard: Dashboard,
}

/// GET / - Metrics and the latest allocations.
pub async fn index(State(state): State<AppState>) -> Response {
    let template = DashboardTemplate {
        shell: state.shell(Page::Dashboard).await,
        dashboard: dashboard::snapshot(),
    };
    views::render(&template)
}
