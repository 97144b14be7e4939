//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Development mode: verbose logging of requests and errors
    #[serde(default = "default_debug")]
    pub debug: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_debug() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: default_debug(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive; empty picks one from `server.debug`
    #[serde(default)]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::new(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive to use when `RUST_LOG` is unset
    pub fn filter(&self, debug: bool) -> String {
        if !self.level.is_empty() {
            self.level.clone()
        } else if debug {
            "cardash=debug,tower_http=debug".to_string()
        } else {
            "cardash=info".to_string()
        }
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Default config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("cardash").join("config.toml")),
            Some(PathBuf::from("./cardash.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here: this runs before the subscriber exists, so the
    /// caller reports the returned [`LoadReport`] once logging is up.
    pub fn load_default() -> (Self, LoadReport) {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first existing file in `paths` that parses, else environment only
    pub fn load_first(paths: &[PathBuf]) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        report.source = Some(path.clone());
                        return (config, report);
                    }
                    Err(e) => report.rejected.push(e),
                }
            }
        }

        (Self::from_env(), report)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a key lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("CARDASH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CARDASH_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid CARDASH_PORT: {}", port),
            }
        }
        if let Some(debug_val) = lookup("CARDASH_DEBUG") {
            match parse_bool(&debug_val) {
                Some(d) => self.server.debug = d,
                None => tracing::warn!("Ignoring invalid CARDASH_DEBUG: {}", debug_val),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("CARDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CARDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Strict boolean for environment flags
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Where `load_default` took its settings from
#[derive(Debug, Default)]
pub struct LoadReport {
    /// File the config was read from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that exist but could not be loaded, in search order
    pub rejected: Vec<ConfigError>,
}

impl LoadReport {
    /// Log the outcome; call once tracing is initialised
    pub fn log(&self) {
        for err in &self.rejected {
            tracing::warn!("{}", err);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Cardash Configuration
#
# Environment variables override these settings:
# - CARDASH_HOST
# - CARDASH_PORT
# - CARDASH_DEBUG
# - CARDASH_LOG_LEVEL
# - CARDASH_LOG_FORMAT

[server]
# Server host
host = "127.0.0.1"

# Server port
port = 8050

# Development mode (debug logging for requests and chart builds)
debug = true

[logging]
# Filter directive, e.g. "cardash=info". Empty derives it from server.debug.
# RUST_LOG takes precedence when set.
level = ""

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
