use ferrous_blacklist_domain::{ConfigError, DomainError};

/// Bad arguments, bad configuration, or a blacklist that failed to load.
pub const EXIT_CONFIG: u8 = 1;
/// The listener could not be bound or the server stopped with an error.
pub const EXIT_INTERNAL: u8 = 2;

/// Fatal conditions detected before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Blacklist(#[from] DomainError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl StartupError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Blacklist(_) => EXIT_CONFIG,
            Self::Bind { .. } | Self::Serve(_) => EXIT_INTERNAL,
        }
    }
}
