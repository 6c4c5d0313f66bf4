//! Route guard middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use csr_core::session::Access;

use crate::state::AppState;

/// Let the request through only with an authenticated session.
pub async fn require_session(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let access = state.session.read().await.guard();
    match access {
        Access::Allow => next.run(request).await,
        Access::Redirect(to) => {
            debug!(path = %request.uri().path(), "Anonymous request redirected to login");
            Redirect::to(to).into_response()
        }
    }
}
