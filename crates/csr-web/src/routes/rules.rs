//! Create/edit/delete handlers shared by every rule page.
//!
//! Each rule page implements [`RulePage`]; the router mounts these generic
//! handlers once per page.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use csr_core::navigation::Page;
use csr_core::rule::{Draft, RuleFields};
use csr_core::ConsoleError;

use crate::state::{AppState, SharedRepository, ToastKind};
use crate::views::{self, FormField, Shell};

/// Glue between a rule domain and its page.
pub trait RulePage: Send + Sync + 'static {
    type Fields: RuleFields;
    /// Body of the create/edit form post.
    type Form: DeserializeOwned + Send + 'static;

    const PAGE: Page;
    const CREATE_TITLE: &'static str;
    const EDIT_TITLE: &'static str;
    const CREATE_SUBMIT: &'static str;
    const EDIT_SUBMIT: &'static str;
    const CREATED: &'static str;
    const UPDATED: &'static str;
    const DELETED: &'static str;

    fn repository(state: &AppState) -> &SharedRepository<Self::Fields>;

    fn into_fields(form: Self::Form) -> Self::Fields;

    fn form_fields(fields: &Self::Fields) -> Vec<FormField>;
}

#[derive(Template)]
#[template(path = "rule_form.html")]
struct RuleFormTemplate {
    shell: Shell,
    heading: &'static str,
    action: String,
    submit_label: &'static str,
    cancel_path: &'static str,
    fields: Vec<FormField>,
}

/// Render the edit surface for `draft`.
async fn render_form<P: RulePage>(state: &AppState, draft: &Draft<P::Fields>, status: StatusCode) -> Response {
    let base = P::PAGE.path();
    let (heading, submit_label, action) = match draft.target_id() {
        None => (P::CREATE_TITLE, P::CREATE_SUBMIT, base.to_string()),
        Some(id) => (P::EDIT_TITLE, P::EDIT_SUBMIT, format!("{}/{}", base, id)),
    };

    let template = RuleFormTemplate {
        shell: state.shell(P::PAGE).await,
        heading,
        action,
        submit_label,
        cancel_path: base,
        fields: P::form_fields(&draft.fields),
    };
    views::render_with_status(status, &template)
}

/// Toast text for a failed commit.
fn error_message<P: RulePage>(err: &ConsoleError) -> String {
    match err {
        ConsoleError::RequiredFieldEmpty { field, .. } => {
            let blank = P::Fields::default();
            let label = P::form_fields(&blank)
                .into_iter()
                .find(|f| f.name == *field)
                .map(|f| f.label)
                .unwrap_or(*field);
            format!("请填写必填项：{}", label)
        }
        ConsoleError::RecordMissing { .. } => "记录不存在或已被删除".to_string(),
        other => other.to_string(),
    }
}

/// GET {page}/new - Open the form in create mode.
pub async fn new_form<P: RulePage>(State(state): State<AppState>) -> Response {
    let draft = P::repository(&state).read().await.begin_create();
    render_form::<P>(&state, &draft, StatusCode::OK).await
}

/// GET {page}/{id}/edit - Open the form on an existing record.
pub async fn edit_form<P: RulePage>(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let draft = P::repository(&state).read().await.begin_edit(&id);
    match draft {
        Ok(draft) => render_form::<P>(&state, &draft, StatusCode::OK).await,
        Err(e) => {
            debug!(error = %e, "Edit requested for missing record");
            state.notify(ToastKind::Error, error_message::<P>(&e));
            Redirect::to(P::PAGE.path()).into_response()
        }
    }
}

/// POST {page} - Commit a create.
pub async fn create<P: RulePage>(State(state): State<AppState>, Form(form): Form<P::Form>) -> Response {
    commit::<P>(&state, Draft::create_with(P::into_fields(form))).await
}

/// POST {page}/{id} - Commit an edit.
pub async fn update<P: RulePage>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<P::Form>,
) -> Response {
    commit::<P>(&state, Draft::edit(id, P::into_fields(form))).await
}

/// POST {page}/{id}/delete - Remove a record. Absent ids still report success.
pub async fn delete<P: RulePage>(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let removal = P::repository(&state).write().await.remove(&id);
    let kind = <P::Fields as RuleFields>::KIND;
    debug!(kind, id = %id, ?removal, "Delete handled");
    state.notify(ToastKind::Success, P::DELETED);
    Redirect::to(P::PAGE.path()).into_response()
}

async fn commit<P: RulePage>(state: &AppState, draft: Draft<P::Fields>) -> Response {
    let result = P::repository(state).write().await.commit(draft.clone());

    match result {
        Ok(_) => {
            let message = if draft.is_create() { P::CREATED } else { P::UPDATED };
            state.notify(ToastKind::Success, message);
            Redirect::to(P::PAGE.path()).into_response()
        }
        Err(e) if e.is_validation() => {
            // Keep the form open with what the operator typed.
            state.notify(ToastKind::Error, error_message::<P>(&e));
            render_form::<P>(state, &draft, StatusCode::UNPROCESSABLE_ENTITY).await
        }
        Err(e) => {
            warn!(error = %e, "Commit failed");
            state.notify(ToastKind::Error, error_message::<P>(&e));
            Redirect::to(P::PAGE.path()).into_response()
        }
    }
}
