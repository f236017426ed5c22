//! Configuration management trait.
//!
//! Binaries describe their configuration as a serde struct and implement
//! [`ConfigManager`] to get path resolution, TOML loading, and environment
//! export for free.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// File name looked up inside the per-project config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// A TOML-backed configuration with environment overrides.
pub trait ConfigManager: Serialize + DeserializeOwned + Default {
    /// Project name, used for the config directory and the env var prefix.
    fn project_name() -> &'static str;

    /// Apply `<PROJECT>_*` environment overrides on top of file values.
    fn apply_env_overrides(&mut self) -> Result<()>;

    /// Upper-cased prefix for environment variables.
    fn env_prefix() -> String {
        Self::project_name().to_uppercase().replace('-', "_")
    }

    /// Platform default location, e.g. `~/.config/<project>/config.toml`.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(Self::project_name()).join(CONFIG_FILE_NAME))
    }

    /// Resolve the config path: explicit argument, then `<PREFIX>_CONFIG`,
    /// then the platform default.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(format!("{}_CONFIG", Self::env_prefix())) {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Load the configuration. A missing file yields defaults; env overrides
    /// are applied either way.
    fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(config_path) {
            Some(path) if path.exists() => {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
                log::debug!("Loading config from {}", path.display());
                toml::from_str(&content).map_err(|e| {
                    Error::config(format!("Failed to parse {}: {e}", path.display()))
                })?
            }
            _ => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Serialize as pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten into `<PREFIX>_<SECTION>_<KEY>=value` pairs.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_env(&Self::env_prefix(), &value, &mut vars);
        Ok(vars)
    }
}

fn flatten_env(prefix: &str, value: &toml::Value, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let name = format!("{prefix}_{}", key.to_uppercase().replace('-', "_"));
                flatten_env(&name, child, out);
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

/// Parse an override value, naming the variable on failure.
///
/// `raw` is the variable's value as looked up by the caller, so overrides can
/// come from the process environment or from a test map.
pub fn parse_var<T>(name: &str, raw: Option<String>) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.map(|value| {
        value
            .parse()
            .map_err(|e| Error::config(format!("Invalid value for {name}: {e}")))
    })
    .transpose()
}
