//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use shiftdesk_core::ReplacementIdentity;

use crate::loader::ConfigLoader;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub scheduling: SchedulingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend ("sqlite" or "memory").
    #[serde(default = "default_backend")]
    pub backend: String,

    /// SQLite database path. `~` and `${VAR}` are expanded.
    #[serde(default)]
    pub db_path: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            db_path: None,
        }
    }
}

impl StorageConfig {
    /// Database path with `~` expanded, falling back to the data directory.
    pub fn resolved_db_path(&self) -> PathBuf {
        match &self.db_path {
            Some(path) => PathBuf::from(ConfigLoader::expand_path(path)),
            None => default_data_dir().join("shiftdesk.db"),
        }
    }
}

fn default_backend() -> String {
    "sqlite".to_string()
}

/// Default data directory (`~/.shiftdesk`).
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".shiftdesk")
}

/// Scheduling rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Reassign all shifts of a replacement in one transaction.
    #[serde(default)]
    pub all_or_nothing: bool,

    /// Reject overlapping bookings for the same talent.
    #[serde(default)]
    pub reject_overlaps: bool,

    /// "reissue" gives replaced shifts new IDs, "preserve" keeps them.
    #[serde(default)]
    pub replacement_identity: ReplacementIdentity,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for daily rotated log files. Console only when unset.
    #[serde(default)]
    pub log_dir: Option<String>,

    /// Emit JSON lines instead of text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            log_dir: None,
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
