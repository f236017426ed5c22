//! addrbook configuration file.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//!
//! [redis]
//! url = "redis://redis:6379"
//!
//! [suggest]
//! base_url = "http://ahunter.ru/site/suggest/address"
//! # timeout_secs = 10
//!
//! [database]
//! url = "postgres://postgres@localhost/postgres"
//! ```

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use addrbook_core::traits::{ConfigManager, parse_var};
use addrbook_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddrbookConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Record store.
    pub redis: RedisConfig,
    /// Address suggest service.
    pub suggest: SuggestConfig,
    /// Transport status database.
    pub database: DatabaseConfig,
}

/// `[server]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

/// `[redis]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Connection URL.
    pub url: String,
}

/// `[suggest]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Endpoint queried with `?output=json;query=...`.
    pub base_url: String,
    /// Request timeout; unset means no timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// `[database]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Postgres connection URL.
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://redis:6379".to_string(),
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            base_url: addrbook_client::DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://postgres@localhost/postgres".to_string(),
        }
    }
}

impl AddrbookConfig {
    /// Socket address for the HTTP listener.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.server.host.parse().map_err(|e| {
            Error::config(format!("Invalid server.host '{}': {e}", self.server.host))
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = Self::env_prefix();
        let var = |key: &str| {
            let name = format!("{prefix}_{key}");
            let value = lookup(&name);
            (name, value)
        };

        let (_, host) = var("SERVER_HOST");
        if let Some(host) = host {
            self.server.host = host;
        }
        let (name, port) = var("SERVER_PORT");
        if let Some(port) = parse_var(&name, port)? {
            self.server.port = port;
        }
        let (_, url) = var("REDIS_URL");
        if let Some(url) = url {
            self.redis.url = url;
        }
        let (_, base_url) = var("SUGGEST_BASE_URL");
        if let Some(base_url) = base_url {
            self.suggest.base_url = base_url;
        }
        let (name, timeout) = var("SUGGEST_TIMEOUT_SECS");
        if let Some(timeout) = parse_var(&name, timeout)? {
            self.suggest.timeout_secs = Some(timeout);
        }
        let (_, url) = var("DATABASE_URL");
        if let Some(url) = url {
            self.database.url = url;
        }
        Ok(())
    }
}

impl SuggestConfig {
    /// Timeout as a [`Duration`], if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl ConfigManager for AddrbookConfig {
    fn project_name() -> &'static str {
        "addrbook"
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }
}
