//! Session commands.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::Path;

use csr_core::config::{ConsoleConfig, SessionBackend};
use csr_core::session::ADMIN_USERNAME;

use crate::output;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Show the persisted session
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log in and persist the session
    Login(LoginArgs),

    /// Clear the persisted session
    Logout,
}

#[derive(Args)]
pub struct LoginArgs {
    /// Username
    #[arg(short, long, default_value = ADMIN_USERNAME)]
    pub username: String,

    /// Password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

pub fn execute(cmd: SessionCommands, config: &ConsoleConfig, project_dir: &Path) -> Result<()> {
    if config.session.store == SessionBackend::Memory {
        bail!("Session store is configured as 'memory'; there is no persisted session to manage.");
    }
    let mut store = config.session_store(project_dir);

    match cmd {
        SessionCommands::Status { json } => {
            let session = store.current_session();
            if json {
                println!("{}", serde_json::to_string_pretty(&session)?);
            } else {
                output::print_session(&session);
            }
        }

        SessionCommands::Login(args) => {
            let password = match args.password {
                Some(password) => password,
                None => dialoguer::Password::new().with_prompt("Password").interact()?,
            };

            let session = store.login(&args.username, &password)?;
            println!("{} Logged in as {}", "✓".green().bold(), session.username.cyan());
        }

        SessionCommands::Logout => {
            store.logout()?;
            println!("{} Logged out", "✓".green().bold());
        }
    }

    Ok(())
}
