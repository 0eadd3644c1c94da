use async_trait::async_trait;
use ferrous_blacklist_application::ports::BlacklistLoader;
use ferrous_blacklist_domain::DomainError;
use std::path::PathBuf;
use tracing::debug;

pub struct FileBlacklistLoader {
    path: PathBuf,
}

impl FileBlacklistLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BlacklistLoader for FileBlacklistLoader {
    async fn load_text(&self) -> Result<String, DomainError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::FileAccess {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(path = %self.path.display(), bytes = text.len(), "Blacklist file read");
        Ok(text)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
