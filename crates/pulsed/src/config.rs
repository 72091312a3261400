//! Configuration management for pulsed.
//!
//! Loads settings from /etc/pulse/config.toml (or $PULSED_CONFIG) and falls
//! back to defaults when the file is missing or unreadable.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/pulse/config.toml";

/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "PULSED_CONFIG";

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8790".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

/// Telemetry source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path of the telemetry snapshot read once at startup
    #[serde(default = "default_telemetry_path")]
    pub telemetry_path: PathBuf,
}

fn default_telemetry_path() -> PathBuf {
    PathBuf::from("/var/lib/pulse/telemetry.json")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            telemetry_path: default_telemetry_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PulsedConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub data: DataConfig,
}

impl PulsedConfig {
    /// Load the config, falling back to defaults on any failure.
    pub fn load() -> Self {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
        Self::load_from_path(Path::new(&path)).unwrap_or_else(|e| {
            warn!("Config not found, using defaults: {}", e);
            Self::default()
        })
    }

    /// Load config from specific path
    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
