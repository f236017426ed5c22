//! addrbook
//!
//! Phone to address lookup service and its batch jobs.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use addrbook_cli::AddrbookConfig;
use addrbook_cli::cli::{Args, Command};
use addrbook_cli::commands;
use addrbook_cli::config_handlers::handle_config_command;
use addrbook_core::ConfigManager;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,addrbook=debug".into())
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = args.config.as_deref();
    match args.command {
        Command::Config { action } => handle_config_command(config_path, action)?,
        Command::Serve { host, port, memory } => {
            let mut config = AddrbookConfig::load(config_path)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve(&config, memory).await?;
        }
        Command::Reconcile { database_url } => {
            let mut config = AddrbookConfig::load(config_path)?;
            if let Some(url) = database_url {
                config.database.url = url;
            }
            let report = commands::run_reconcile(&config).await?;
            println!("Updated {} full_names rows", report.updated);
        }
    }
    Ok(())
}
