//! Config loader — reads `~/.termfolio/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.termfolio/config.json`
//! 3. Environment variables `TERMFOLIO_<SECTION>__<FIELD>` (override JSON)

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't
/// be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    load_config_from_path(&config_path)
}

/// Load config from a specific file path.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return apply_env_overrides(Config::default());
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return apply_env_overrides(Config::default());
        }
    };

    let config: Config = match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            return apply_env_overrides(Config::default());
        }
    };

    apply_env_overrides(config)
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    // Ensure parent directory exists
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Env var format: `TERMFOLIO_<SECTION>__<FIELD>` (double underscore as
/// delimiter).
///
/// Supported overrides:
/// - `TERMFOLIO_CHAT__PROVIDER` → `chat.provider`
/// - `TERMFOLIO_CHAT__API_KEY` → `chat.api_key`
/// - `TERMFOLIO_CHAT__BASE_URL` → `chat.base_url`
/// - `TERMFOLIO_CHAT__MODEL` → `chat.model`
/// - `TERMFOLIO_CHAT__MAX_TURNS` → `chat.max_turns`
/// - `TERMFOLIO_CHAT__HISTORY_WINDOW` → `chat.history_window`
/// - `TERMFOLIO_PERSONA__NAME` → `persona.name`
/// - `TERMFOLIO_PERSONA__PROFILE` → `persona.profile`
fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(val) = std::env::var("TERMFOLIO_CHAT__PROVIDER") {
        config.chat.provider = val;
    }
    if let Ok(val) = std::env::var("TERMFOLIO_CHAT__API_KEY") {
        config.chat.api_key = val;
    }
    if let Ok(val) = std::env::var("TERMFOLIO_CHAT__BASE_URL") {
        config.chat.base_url = Some(val);
    }
    if let Ok(val) = std::env::var("TERMFOLIO_CHAT__MODEL") {
        config.chat.model = val;
    }
    if let Ok(val) = std::env::var("TERMFOLIO_CHAT__MAX_TURNS") {
        if let Ok(n) = val.parse::<u32>() {
            config.chat.max_turns = n;
        }
    }
    if let Ok(val) = std::env::var("TERMFOLIO_CHAT__HISTORY_WINDOW") {
        if let Ok(n) = val.parse::<usize>() {
            config.chat.history_window = n;
        }
    }

    if let Ok(val) = std::env::var("TERMFOLIO_PERSONA__NAME") {
        config.persona.name = val;
    }
    if let Ok(val) = std::env::var("TERMFOLIO_PERSONA__PROFILE") {
        config.persona.profile = Some(val);
    }

    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
