//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.parley/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ParleyConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub game: GameConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    pub thread_id: Option<String>,
    pub npc_name: Option<String>,
    pub slot_count: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_THREAD_ID: &str = "player1";
pub const DEFAULT_NPC_NAME: &str = "Scarlet";
pub const DEFAULT_SLOT_COUNT: usize = 8;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub thread_id: String,
    pub npc_name: String,
    pub slot_count: usize,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.parley/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".parley").join("config.toml"))
}

/// Load config from `~/.parley/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ParleyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ParleyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ParleyConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ParleyConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ParleyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Parley Configuration
# All settings are optional - defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [server]
# base_url = "http://localhost:8000/api"   # Or set PARLEY_SERVER_URL env var

# [game]
# thread_id = "player1"                    # Or set PARLEY_THREAD_ID env var
# npc_name = "Scarlet"
# slot_count = 8
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars
/// → CLI. Rejects a zero slot count; the hotbar cannot be empty.
///
/// `cli_server` and `cli_thread` are from CLI flags (None = not specified).
pub fn resolve(
    config: &ParleyConfig,
    cli_server: Option<&str>,
    cli_thread: Option<&str>,
) -> Result<ResolvedConfig, ConfigError> {
    // Server base URL: CLI → env → config → default
    let base_url = cli_server
        .map(|s| s.to_string())
        .or_else(|| std::env::var("PARLEY_SERVER_URL").ok())
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Thread id: CLI → env → config → default
    let thread_id = cli_thread
        .map(|s| s.to_string())
        .or_else(|| std::env::var("PARLEY_THREAD_ID").ok())
        .or_else(|| config.game.thread_id.clone())
        .unwrap_or_else(|| DEFAULT_THREAD_ID.to_string());

    let npc_name = config
        .game
        .npc_name
        .clone()
        .unwrap_or_else(|| DEFAULT_NPC_NAME.to_string());

    let slot_count = config.game.slot_count.unwrap_or(DEFAULT_SLOT_COUNT);
    if slot_count == 0 {
        return Err(ConfigError::Invalid(
            "slot_count must be at least 1".to_string(),
        ));
    }

    Ok(ResolvedConfig {
        // Trailing slash would double up when joining "/chat"
        base_url: base_url.trim_end_matches('/').to_string(),
        thread_id,
        npc_name,
        slot_count,
    })
}
