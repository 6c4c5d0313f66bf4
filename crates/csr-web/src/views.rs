//! Shared view models and template rendering.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use csr_core::navigation::MenuItem;

use crate::state::Toast;

/// Sidebar and header data every shell page needs.
pub struct Shell {
    pub title: &'static str,
    pub username: String,
    pub initial: String,
    pub menu: Vec<MenuItem>,
    pub toasts: Vec<Toast>,
}

/// One input of a create/edit form.
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    /// Rendered as a textarea with this many rows when non-zero.
    pub rows: u8,
    pub placeholder: &'static str,
}

impl FormField {
    pub fn input(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            label,
            value: value.into(),
            rows: 0,
            placeholder: "",
        }
    }

    pub fn textarea(name: &'static str, label: &'static str, value: impl Into<String>, rows: u8) -> Self {
        Self {
            rows,
            ..Self::input(name, label, value)
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn multiline(&self) -> bool {
        self.rows > 0
    }
}

/// Render a template, mapping failures to a 500 page.
pub fn render<T: Template>(template: &T) -> Response {
    render_with_status(StatusCode::OK, template)
}

/// Render a template with an explicit status code.
pub fn render_with_status<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("Template error: {}", e))).into_response()
        }
    }
}
