//! `addrbook config` subcommands.
//!
//! Each handler returns what it would print so the dispatch in
//! [`handle_config_command`] is the only place that writes to stdout.

use std::path::PathBuf;

use addrbook_core::traits::ConfigManager;
use addrbook_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::AddrbookConfig;

/// Run a config subcommand against [`AddrbookConfig`].
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => {
            let path = resolve_path::<AddrbookConfig>(config_path)?;
            println!("{}", path.display());
            if !path.exists() {
                eprintln!(
                    "(file does not exist, run `{} config init` to create it)",
                    AddrbookConfig::project_name()
                );
            }
        }
        ConfigAction::Get { key } => {
            println!("{}", get_value::<AddrbookConfig>(config_path, &key)?);
        }
        ConfigAction::Set { key, value } => {
            let path = set_value::<AddrbookConfig>(config_path, &key, &value)?;
            println!("Set {key} = {value} in {}", path.display());
        }
        ConfigAction::Init { file, force } => {
            let path = init_file::<AddrbookConfig>(file.as_deref(), force)?;
            println!("Config file created at {}", path.display());
        }
        ConfigAction::Export { docker_env } => {
            let config = AddrbookConfig::load(config_path)?;
            for line in export_lines(&config, docker_env)? {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// The config file path that would be loaded.
pub fn resolve_path<C: ConfigManager>(config_path: Option<&str>) -> Result<PathBuf> {
    C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))
}

/// A loaded value by dotted key, formatted for display.
pub fn get_value<C: ConfigManager>(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = C::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    lookup(&value, key)
        .map(display_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Write a value by dotted key into an existing config file.
pub fn set_value<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    value: &str,
) -> Result<PathBuf> {
    let path = resolve_path::<C>(config_path)?;
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{} config init` first.",
            path.display(),
            C::project_name()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    insert(&mut doc, key, infer_value(value))?;

    // Reject edits the typed config can no longer read, e.g. a string port.
    doc.clone()
        .try_into::<C>()
        .map_err(|e| Error::config(format!("Invalid value for '{key}': {e}")))?;

    let rendered = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    std::fs::write(&path, rendered).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}

/// Write a default config file, creating parent directories.
pub fn init_file<C: ConfigManager>(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => C::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let rendered = C::default().to_toml_string()?;
    std::fs::write(&path, rendered).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}

/// `KEY=value` lines, or `--env KEY=value` for `docker run`.
pub fn export_lines<C: ConfigManager>(config: &C, docker_env: bool) -> Result<Vec<String>> {
    Ok(config
        .to_env_vars()?
        .into_iter()
        .map(|(key, value)| {
            if docker_env {
                format!("--env {key}={value}")
            } else {
                format!("{key}={value}")
            }
        })
        .collect())
}

/// Follow a dotted key through nested tables.
pub fn lookup<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Insert at a dotted key, creating intermediate tables.
pub fn insert(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };
    if leaf.is_empty() {
        return Err(Error::config(format!("Invalid key '{key}'")));
    }

    let mut current = root;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config(format!("Cannot descend into '{part}' in '{key}'")))?;
        current = table
            .entry(part.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config(format!("Cannot set '{key}' on a non-table value")))?;
    table.insert(leaf.to_string(), value);
    Ok(())
}

/// Read a command-line value as bool, then integer, then string.
pub fn infer_value(s: &str) -> toml::Value {
    match s {
        "true" => toml::Value::Boolean(true),
        "false" => toml::Value::Boolean(false),
        _ => s
            .parse::<i64>()
            .map(toml::Value::Integer)
            .unwrap_or_else(|_| toml::Value::String(s.to_string())),
    }
}

/// Strings print bare; everything else prints as TOML.
pub fn display_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}
