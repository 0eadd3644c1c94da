use async_trait::async_trait;
use ferrous_blacklist_domain::DomainError;

/// Fetches the raw newline-delimited blacklist text from a source.
#[async_trait]
pub trait BlacklistLoader: Send + Sync {
    async fn load_text(&self) -> Result<String, DomainError>;

    /// Human-readable source name for logs.
    fn describe(&self) -> String;
}
