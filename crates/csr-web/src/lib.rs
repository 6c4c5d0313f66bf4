//! CSR Console Web Server
//!
//! Axum-based server rendering the admin console pages and a read-only JSON API.

pub mod auth;
pub mod routes;
pub mod state;
pub mod views;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use csr_core::session::SessionStore;
use routes::{
    customer_rules::CustomerRules, group_management::GroupManagement, intent_rules::IntentRules,
    rules::{self, RulePage},
};
use state::AppState;

/// Mount the form, edit and delete routes of one rule page.
///
/// The page's own `GET`/`POST` on its base path is registered by the caller.
fn rule_routes<P: RulePage>() -> Router<AppState> {
    let base = P::PAGE.path();
    Router::new()
        .route(&format!("{}/new", base), get(rules::new_form::<P>))
        .route(&format!("{}/{{id}}", base), post(rules::update::<P>))
        .route(&format!("{}/{{id}}/edit", base), get(rules::edit_form::<P>))
        .route(&format!("{}/{{id}}/delete", base), post(rules::delete::<P>))
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/session", get(routes::api::get_session))
        .route("/dashboard", get(routes::api::get_dashboard))
        .route("/intent-rules", get(routes::api::list_intent_rules))
        .route("/customer-rules", get(routes::api::list_customer_rules))
        .route("/customer-rules/lookup", get(routes::api::lookup_customer))
        .route("/groups", get(routes::api::list_groups))
        .route("/staff", get(routes::api::list_staff))
        .route("/requests", get(routes::api::list_requests))
        .layer(cors);

    let protected = Router::new()
        .route("/", get(routes::dashboard::index))
        .route(
            "/intent-rules",
            get(routes::intent_rules::index).post(rules::create::<IntentRules>),
        )
        .route(
            "/customer-rules",
            get(routes::customer_rules::index).post(rules::create::<CustomerRules>),
        )
        .route("/customer-rules/lookup", get(routes::customer_rules::lookup))
        .route(
            "/group-management",
            get(routes::group_management::index).post(rules::create::<GroupManagement>),
        )
        .route("/request-history", get(routes::request_history::index))
        .route("/logout", post(routes::login::logout))
        .merge(rule_routes::<IntentRules>())
        .merge(rule_routes::<CustomerRules>())
        .merge(rule_routes::<GroupManagement>())
        .nest("/api", api_routes)
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_session));

    Router::new()
        .route("/login", get(routes::login::form).post(routes::login::submit))
        .merge(protected)
        .fallback(routes::not_found::page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(session: SessionStore, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(session);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Console listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
