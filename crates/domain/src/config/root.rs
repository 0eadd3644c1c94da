use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::blacklist::BlacklistConfig;
use super::errors::ConfigError;
use super::etcd::EtcdConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::source::BlacklistSource;

const LOCAL_CONFIG_PATH: &str = "ferrous-blacklist.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-blacklist/config.toml";

/// Main configuration structure for Ferrous Blacklist
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (bind address, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// Blacklist source selection
    #[serde(default)]
    pub blacklist: BlacklistConfig,

    /// Remote key-value store settings, used when `blacklist.etcd` is set
    #[serde(default)]
    pub etcd: EtcdConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-blacklist.toml in current directory
    /// 3. /etc/ferrous-blacklist/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_owned).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(file) = overrides.blacklist_file {
            self.blacklist.file = Some(file);
        }
        if overrides.etcd {
            self.blacklist.etcd = true;
        }
        if !overrides.etcd_endpoints.is_empty() {
            self.etcd.endpoints = overrides.etcd_endpoints;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.blacklist.etcd {
            if self.etcd.endpoints.iter().all(|e| e.trim().is_empty()) {
                return Err(ConfigError::Validation(
                    "No etcd endpoints configured".to_string(),
                ));
            }
            if !self.etcd.key.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "etcd key '{}' must start with '/'",
                    self.etcd.key
                )));
            }
            if self.etcd.request_timeout_ms == 0 {
                return Err(ConfigError::Validation(
                    "etcd request timeout cannot be 0".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Resolve the single blacklist source this process loads from.
    pub fn blacklist_source(&self) -> Result<BlacklistSource, ConfigError> {
        match (self.blacklist.file_path(), self.blacklist.etcd) {
            (Some(_), true) => Err(ConfigError::ConflictingSources),
            (Some(path), false) => Ok(BlacklistSource::File(PathBuf::from(path))),
            (None, true) => Ok(BlacklistSource::Etcd(self.etcd.clone())),
            (None, false) => Err(ConfigError::NoSource),
        }
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_owned)
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub blacklist_file: Option<String>,
    pub etcd: bool,
    pub etcd_endpoints: Vec<String>,
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
