//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Environment variables, when `DIWAN_DATA_DIR` is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//!
//! ## Environment Variables
//! - `DIWAN_DATA_DIR`: root directory for local data (required)
//! - `DIWAN_SEED_FILE`: JSON snapshot for the in-memory directory
//! - `DIWAN_LOG_LEVEL`: default log level (`info` when unset)
//! - `DIWAN_LOG_JSON`: emit JSON log lines (true/false)
//!
//! ## File Locations
//! `config.{json,toml}` and `diwan.{json,toml}` in the working directory,
//! `config.{json,toml}` in its parent and grandparent, then the same set
//! relative to the executable.

use std::path::{Path, PathBuf};

use diwan_domain::constants::DEFAULT_LOG_LEVEL;
use diwan_domain::{Config, DiwanError, LoggingConfig, Result, StorageConfig};

const ENV_DATA_DIR: &str = "DIWAN_DATA_DIR";
const ENV_SEED_FILE: &str = "DIWAN_SEED_FILE";
const ENV_LOG_LEVEL: &str = "DIWAN_LOG_LEVEL";
const ENV_LOG_JSON: &str = "DIWAN_LOG_JSON";

/// Load configuration from the environment, falling back to a config file
///
/// # Errors
/// Returns `DiwanError::Config` when neither source yields a valid
/// configuration.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Environment configuration incomplete, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from `DIWAN_*` environment variables
///
/// # Errors
/// Returns `DiwanError::Config` if `DIWAN_DATA_DIR` is missing or empty.
pub fn load_from_env() -> Result<Config> {
    let data_dir = env_var(ENV_DATA_DIR)?;
    if data_dir.trim().is_empty() {
        return Err(DiwanError::Config(format!("{ENV_DATA_DIR} must not be empty")));
    }

    let seed_file = std::env::var(ENV_SEED_FILE).ok().filter(|s| !s.trim().is_empty());
    let level = std::env::var(ENV_LOG_LEVEL)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    Ok(Config {
        storage: StorageConfig { data_dir, seed_file },
        logging: LoggingConfig { level, json: env_bool(ENV_LOG_JSON, false) },
    })
}

/// Load configuration from a JSON or TOML file
///
/// With `None`, the first file found by [`probe_config_paths`] is used.
///
/// # Errors
/// Returns `DiwanError::Config` if the file is missing, unreadable or not a
/// valid configuration.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) if p.exists() => p,
        Some(p) => {
            return Err(DiwanError::Config(format!("Config file not found: {}", p.display())));
        }
        None => probe_config_paths().ok_or_else(|| {
            DiwanError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DiwanError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DiwanError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DiwanError::Config(format!("Invalid JSON format: {e}"))),
        other => Err(DiwanError::Config(format!("Unsupported config format: {other}"))),
    }
}

/// First existing config file among the standard locations
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        roots.push(exe_dir);
    }

    roots.iter().flat_map(|root| candidates_under(root)).find(|path| path.exists())
}

fn candidates_under(root: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    for stem in ["config", "diwan"] {
        for ext in ["json", "toml"] {
            candidates.push(root.join(format!("{stem}.{ext}")));
        }
    }
    for up in ["..", "../.."] {
        for ext in ["json", "toml"] {
            candidates.push(root.join(up).join(format!("config.{ext}")));
        }
    }
    candidates
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| DiwanError::Config(format!("Missing required environment variable: {key}")))
}

/// `1`/`true`/`yes`/`on` (case-insensitive) are true, anything else false
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map_or(default, |s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
