//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// addrbook - phone to address lookup service
#[derive(Parser, Debug)]
#[command(name = "addrbook", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Override `server.host`
        #[arg(long)]
        host: Option<String>,

        /// Override `server.port`
        #[arg(long)]
        port: Option<u16>,

        /// Keep records in process memory instead of Redis
        #[arg(long)]
        memory: bool,
    },

    /// Copy transport statuses from `short_names` onto `full_names`
    Reconcile {
        /// Override `database.url`
        #[arg(long)]
        database_url: Option<String>,
    },

    /// Configuration management
    Config {
        /// Config subcommand
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `addrbook config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,

    /// Print a value by dotted key, e.g. `server.port`
    Get {
        /// Dotted key
        key: String,
    },

    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },

    /// Write a default config file
    Init {
        /// Destination (defaults to the platform config dir)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for `docker run`
        #[arg(long)]
        docker_env: bool,
    },
}
