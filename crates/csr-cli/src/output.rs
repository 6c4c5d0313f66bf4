//! Terminal output formatting.

use colored::Colorize;
use csr_core::session::{Session, SessionState};

/// Status line for a session.
pub fn session_line(session: &Session) -> String {
    match session.state() {
        SessionState::Authenticated => format!("authenticated as {}", session.username),
        SessionState::Anonymous => "anonymous".to_string(),
    }
}

/// Print the session state.
pub fn print_session(session: &Session) {
    let line = session_line(session);
    match session.state() {
        SessionState::Authenticated => println!("{}: {}", "Session".bold(), line.green()),
        SessionState::Anonymous => println!("{}: {}", "Session".bold(), line.dimmed()),
    }
}
