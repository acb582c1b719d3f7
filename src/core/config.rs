//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vidsearch/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::search::SearchOrder;
use crate::search::youtube::DEFAULT_YOUTUBE_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VidsearchConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub youtube: YouTubeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub initial_term: Option<String>,
    pub debounce_ms: Option<u64>,
    pub max_results: Option<u32>,
    pub order: Option<SearchOrder>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct YouTubeConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_INITIAL_TERM: &str = "minions";
pub const DEFAULT_DEBOUNCE_MS: u64 = 700;
pub const DEFAULT_MAX_RESULTS: u32 = 5;
/// The YouTube API rejects `maxResults` above 50.
pub const MAX_RESULTS_LIMIT: u32 = 50;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub initial_term: String,
    pub debounce: Duration,
    pub max_results: u32,
    pub order: SearchOrder,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub term: Option<&'a str>,
    pub max_results: Option<u32>,
    pub order: Option<SearchOrder>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.vidsearch/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vidsearch").join("config.toml"))
}

/// Load config from `~/.vidsearch/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VidsearchConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VidsearchConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VidsearchConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VidsearchConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parse config TOML. Split out from `load_config` so it can be tested without a home dir.
pub fn parse_config(contents: &str) -> Result<VidsearchConfig, ConfigError> {
    let config: VidsearchConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;
    // The API key is deliberately left out of the log
    debug!(
        "Config: general={:?}, youtube.base_url={:?}, youtube.api_key set={}",
        config.general,
        config.youtube.base_url,
        config.youtube.api_key.is_some()
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# vidsearch Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# initial_term = "minions"          # Search issued at start-up (or VIDSEARCH_INITIAL_TERM)
# debounce_ms = 700                 # Quiet period after typing before searching
# max_results = 5                   # 1-50
# order = "relevance"               # "relevance", "date", "rating", "title", "viewCount"

# [youtube]
# api_key = "AIza..."               # Or set YOUTUBE_API_KEY env var
# base_url = "https://www.googleapis.com/youtube/v3"
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &VidsearchConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // API key: env → config
    let api_key = std::env::var("YOUTUBE_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
        .or_else(|| config.youtube.api_key.clone());

    // Base URL: env → config → default
    let base_url = std::env::var("YOUTUBE_BASE_URL")
        .ok()
        .or_else(|| config.youtube.base_url.clone())
        .unwrap_or_else(|| DEFAULT_YOUTUBE_BASE_URL.to_string());

    // Initial term: CLI → env → config → default
    let initial_term = cli
        .term
        .map(|s| s.to_string())
        .or_else(|| std::env::var("VIDSEARCH_INITIAL_TERM").ok())
        .or_else(|| config.general.initial_term.clone())
        .unwrap_or_else(|| DEFAULT_INITIAL_TERM.to_string());

    let max_results = cli
        .max_results
        .or(config.general.max_results)
        .unwrap_or(DEFAULT_MAX_RESULTS)
        .clamp(1, MAX_RESULTS_LIMIT);

    ResolvedConfig {
        api_key,
        base_url,
        initial_term,
        debounce: Duration::from_millis(
            config.general.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
        ),
        max_results,
        order: cli.order.or(config.general.order).unwrap_or_default(),
    }
}
