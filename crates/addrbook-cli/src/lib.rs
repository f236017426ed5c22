//! # addrbook-cli
//!
//! Command-line entry point for addrbook.
//!
//! - `serve`: run the HTTP API against Redis and the suggest service
//! - `reconcile`: copy transport statuses between the Postgres name tables
//! - `config`: inspect and edit the TOML configuration file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

pub use config::AddrbookConfig;
pub use error::{Error, Result};
