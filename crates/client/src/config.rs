//! API configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `VERDANT_API_BASE_URL`: Base URL of the Verdant API (required)
//! - `VERDANT_API_TIMEOUT_SECS`: Request timeout in seconds (optional,
//!   default 30)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;
use verdant_domain::{Result, VerdantError};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable request configuration for the API client factory.
///
/// Constructed once and shared; a client built from this configuration
/// never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, e.g. `https://api.verdant.example/v1`
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ApiConfig {
    /// Create a configuration with a validated base URL.
    ///
    /// A trailing slash is trimmed so request paths can always start
    /// with `/`.
    ///
    /// # Errors
    /// Returns `VerdantError::Config` if the base URL does not parse.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|e| VerdantError::Config(format!("Invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load configuration with automatic fallback strategy.
    ///
    /// First attempts to load from environment variables. If the required
    /// variables are missing, falls back to loading from a config file.
    ///
    /// # Errors
    /// Returns `VerdantError::Config` if neither source yields a valid
    /// configuration.
    pub fn load() -> Result<Self> {
        match Self::load_from_env() {
            Ok(config) => {
                tracing::info!("Configuration loaded from environment variables");
                Ok(config)
            }
            Err(e) => {
                tracing::debug!(error = ?e, "Failed to load from environment, trying file");
                Self::load_from_file(None)
            }
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns `VerdantError::Config` if `VERDANT_API_BASE_URL` is missing
    /// or any value is invalid.
    pub fn load_from_env() -> Result<Self> {
        let base_url = env_var("VERDANT_API_BASE_URL")?;
        let mut config = Self::new(base_url)?;

        if let Ok(raw) = std::env::var("VERDANT_API_TIMEOUT_SECS") {
            config.timeout_secs = raw
                .parse::<u64>()
                .map_err(|e| VerdantError::Config(format!("Invalid timeout: {e}")))?;
        }

        Ok(config)
    }

    /// Load configuration from a file.
    ///
    /// If `path` is `None`, probes multiple locations for config files.
    /// Supports both JSON and TOML formats (detected by file extension).
    ///
    /// # Errors
    /// Returns `VerdantError::Config` if the file is missing, no candidate
    /// is found, or the contents do not parse.
    pub fn load_from_file(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(VerdantError::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                p
            }
            None => probe_config_paths().ok_or_else(|| {
                VerdantError::Config(
                    "No config file found in any of the standard locations".to_string(),
                )
            })?,
        };

        tracing::info!(path = %config_path.display(), "Loading configuration from file");

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| VerdantError::Config(format!("Failed to read config file: {e}")))?;

        let parsed = parse_config(&contents, &config_path)?;
        // Re-validate through the constructor so file input gets the same
        // URL check as programmatic input.
        let mut config = Self::new(parsed.base_url)?;
        config.timeout_secs = parsed.timeout_secs;
        Ok(config)
    }
}

/// Parse configuration from string content.
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ApiConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| VerdantError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| VerdantError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(VerdantError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files.
///
/// Searches the current working directory, up to two parent levels, and the
/// executable's directory for `config.{json,toml}` / `verdant.{json,toml}`.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("verdant.json"),
            cwd.join("verdant.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("verdant.json"),
                exe_dir.join("verdant.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        VerdantError::Config(format!("Missing required environment variable: {key}"))
    })
}
