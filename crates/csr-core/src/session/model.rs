//! Session domain models.

use serde::{Deserialize, Serialize};

use crate::navigation::LOGIN_PATH;

/// Authentication state shared by every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub username: String,
}

impl Session {
    pub fn anonymous(username: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            username: username.into(),
        }
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            username: username.into(),
        }
    }

    pub fn state(&self) -> SessionState {
        if self.authenticated {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// First character of the username, for the avatar bubble.
    pub fn initial(&self) -> String {
        self.username.chars().next().map(String::from).unwrap_or_default()
    }
}

/// The two states of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Route guard verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

/// Gate a protected page on the session.
pub fn guard(session: &Session) -> Access {
    if session.authenticated {
        Access::Allow
    } else {
        Access::Redirect(LOGIN_PATH)
    }
}
