use std::path::{Path, PathBuf};

use anyhow::Context;
use toml::{map::Map, Value};
use tracing::info;

static CONFIG_DIR: &str = "BLUEPRINT_CONFIG_DIR";

/// Directory holding `Config.toml`. `BLUEPRINT_CONFIG_DIR` overrides the
/// current working directory.
pub fn config_dir() -> PathBuf {
    std::env::var_os(CONFIG_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn load_config(config_name: &str) -> anyhow::Result<Map<String, Value>> {
    load_config_from(&config_dir().join(config_name))
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let config = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<Map<String, Value>>(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Seeds the process environment from `.env` in [`config_dir`] when one
/// exists. Variables already present in the environment are left untouched.
pub fn load_env() -> anyhow::Result<()> {
    load_env_from(&config_dir().join(".env"))
}

/// A missing file is not an error; a malformed one is.
pub fn load_env_from(path: &Path) -> anyhow::Result<()> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            info!(task = "load env", path = %path.display());
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => {
            Err(e).with_context(|| format!("failed to load {}", path.display()))
        }
    }
}

pub fn env_var(name: &str) -> anyhow::Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .with_context(|| format!("{} was not found", name))
}

pub fn env_or(name: &str, default: &str) -> String {
    env_var(name).unwrap_or_else(|_| default.to_string())
}
