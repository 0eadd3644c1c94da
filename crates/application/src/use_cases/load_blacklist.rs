use crate::ports::BlacklistLoader;
use ferrous_blacklist_domain::{Blacklist, DomainError};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct LoadBlacklistUseCase {
    loader: Arc<dyn BlacklistLoader>,
}

impl LoadBlacklistUseCase {
    pub fn new(loader: Arc<dyn BlacklistLoader>) -> Self {
        Self { loader }
    }

    /// Loads the blacklist once. A store nothing can match is rejected.
    #[instrument(skip(self), fields(source = %self.loader.describe()))]
    pub async fn execute(&self) -> Result<Arc<Blacklist>, DomainError> {
        let text = self.loader.load_text().await?;
        let blacklist = Blacklist::from_text(&text);

        if blacklist.matchable_len() == 0 {
            warn!(bytes = text.len(), "Loaded blacklist has no entries");
            return Err(DomainError::EmptyBlacklist);
        }

        info!(
            entries = blacklist.len(),
            matchable = blacklist.matchable_len(),
            "Blacklist loaded"
        );

        Ok(Arc::new(blacklist))
    }
}
