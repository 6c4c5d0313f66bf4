//! Login and logout.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::error;

use csr_core::navigation::{Page, LOGIN_PATH};
use csr_core::session::ADMIN_USERNAME;
use csr_core::ConsoleError;

use crate::state::{AppState, Toast, ToastKind};
use crate::views;

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    username: String,
    password: String,
    toasts: Vec<Toast>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// GET /login - The form comes pre-filled with the demo account.
pub async fn form(State(state): State<AppState>) -> Response {
    let template = LoginTemplate {
        username: ADMIN_USERNAME.to_string(),
        password: "password".to_string(),
        toasts: state.take_toasts(),
    };
    views::render(&template)
}

/// POST /login
pub async fn submit(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let result = state.session.write().await.login(&form.username, &form.password);

    match result {
        Ok(_) => {
            state.notify(ToastKind::Success, "登录成功！");
            Redirect::to(Page::Dashboard.path()).into_response()
        }
        Err(e) => {
            let message = match e {
                ConsoleError::InvalidCredentials => "用户名或密码错误".to_string(),
                other => {
                    error!(error = %other, "Could not persist session");
                    format!("登录失败: {}", other)
                }
            };
            state.notify(ToastKind::Error, message);
            let template = LoginTemplate {
                username: form.username,
                password: form.password,
                toasts: state.take_toasts(),
            };
            views::render_with_status(StatusCode::UNAUTHORIZED, &template)
        }
    }
}

/// POST /logout
pub async fn logout(State(state): State<AppState>) -> Response {
    if let Err(e) = state.session.write().await.logout() {
        error!(error = %e, "Could not clear session");
        state.notify(ToastKind::Error, format!("退出失败: {}", e));
        return Redirect::to(Page::Dashboard.path()).into_response();
    }
    state.notify(ToastKind::Success, "已退出登录");
    Redirect::to(LOGIN_PATH).into_response()
}
