//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use csr_core::config::{ConsoleConfig, SessionBackend};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides the config file)
    #[arg(long, env = "CSR_PORT")]
    pub port: Option<u16>,

    /// Host to bind to (overrides the config file)
    #[arg(long, env = "CSR_HOST")]
    pub host: Option<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to <project>/.csr/serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, mut config: ConsoleConfig, project_dir: &Path) -> Result<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    let session = config.session_store(project_dir);
    let host = config.server.host.as_str();
    let port = config.server.port;

    println!();
    println!("  {} {}", "CSR".cyan().bold(), "Admin Console".bold());
    println!();
    println!("  {}    http://{}:{}", "Console".green(), host, port);
    println!("  {}        http://{}:{}/api", "API".green(), host, port);
    match config.session.store {
        SessionBackend::File => println!(
            "  {}    {}",
            "Session".green(),
            config.session_path(project_dir).display()
        ),
        SessionBackend::Memory => println!("  {}    {}", "Session".green(), "in memory".dimmed()),
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    csr_web::run_server(session, host, port).await?;

    Ok(())
}
