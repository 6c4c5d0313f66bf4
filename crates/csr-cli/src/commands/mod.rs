//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use csr_core::config::ConsoleConfig;

pub mod serve;
pub mod session;

/// Customer-service routing admin console
#[derive(Parser)]
#[command(name = "csr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Config file (defaults to <project>/csr.toml)
    #[arg(short, long, global = true, env = "CSR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the console web server
    Serve(serve::ServeArgs),

    /// Inspect or change the persisted operator session
    #[command(subcommand)]
    Session(session::SessionCommands),
}

impl Cli {
    pub fn project_dir(&self) -> Result<PathBuf> {
        match &self.project {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("Cannot determine current directory"),
        }
    }

    fn load_config(&self, project_dir: &Path) -> Result<ConsoleConfig> {
        let config = match &self.config {
            Some(path) => ConsoleConfig::load_file(path)?,
            None => ConsoleConfig::load(project_dir)?,
        };
        Ok(config)
    }

    pub async fn execute(self, project_dir: &Path) -> Result<()> {
        let config = self.load_config(project_dir)?;

        match self.command {
            Commands::Serve(args) => serve::execute(args, config, project_dir).await,
            Commands::Session(cmd) => session::execute(cmd, &config, project_dir),
        }
    }
}
