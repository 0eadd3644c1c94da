use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot read blacklist file {path}: {reason}")]
    FileAccess { path: String, reason: String },

    #[error("Remote store unavailable at {endpoint}: {reason}")]
    RemoteUnavailable { endpoint: String, reason: String },

    #[error("Remote store protocol error: {0}")]
    RemoteProtocol(String),

    #[error("Key not found in remote store: {0}")]
    KeyNotFound(String),

    #[error("blacklist is required")]
    EmptyBlacklist,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
