use ferrous_blacklist_application::use_cases::LoadBlacklistUseCase;
use ferrous_blacklist_domain::{Blacklist, BlacklistSource, DomainError};
use ferrous_blacklist_infrastructure::sources::build_loader;
use std::sync::Arc;
use tracing::info;

pub async fn load_blacklist(source: &BlacklistSource) -> Result<Arc<Blacklist>, DomainError> {
    info!(source = %source, "Loading blacklist");

    let loader = build_loader(source)?;
    LoadBlacklistUseCase::new(loader).execute().await
}
