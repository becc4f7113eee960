//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_DIR_NAME;

/// Log levels accepted in the `[logging]` section.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// HTTP server binding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host name or IP address to bind to (e.g., "localhost", "::1")
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Resolves the configured host and port into a socket address.
    ///
    /// Accepts IPv4 and bare IPv6 literals as well as host names; a name
    /// that resolves to several addresses binds to the first one.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let host = self.host.trim();
        (host, self.port)
            .to_socket_addrs()
            .with_context(|| format!("Invalid server address: {host} port {}", self.port))?
            .next()
            .with_context(|| format!("No address found for host: {host}"))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level filter (trace, debug, info, warn, error).
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Application configuration.
///
/// Stored at `<config dir>/ResistorBands/config.toml`. Every field has a
/// default, so a missing file or a partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/ResistorBands/`
    /// - macOS: `~/Library/Application Support/ResistorBands/`
    /// - Windows: `%APPDATA%\ResistorBands\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from a specific file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a specific file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `server.host` is not empty
    /// - `logging.level` is one of trace, debug, info, warn, error
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            bail!("server.host cannot be empty");
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            bail!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }
}
