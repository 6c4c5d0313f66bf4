//! Catch-all page.

use askama::Template;
use axum::{http::StatusCode, http::Uri, response::Response};

use crate::views;

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    path: String,
}

/// Fallback for every unknown path. Not gated by the session.
pub async fn page(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    views::render_with_status(
        StatusCode::NOT_FOUND,
        &NotFoundTemplate {
            path: uri.path().to_string(),
        },
    )
}
