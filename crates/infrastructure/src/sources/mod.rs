pub mod etcd;
pub mod file;

pub use etcd::EtcdBlacklistLoader;
pub use file::FileBlacklistLoader;

use ferrous_blacklist_application::ports::BlacklistLoader;
use ferrous_blacklist_domain::{BlacklistSource, DomainError};
use std::sync::Arc;

/// Builds the loader for the selected source.
pub fn build_loader(source: &BlacklistSource) -> Result<Arc<dyn BlacklistLoader>, DomainError> {
    let loader: Arc<dyn BlacklistLoader> = match source {
        BlacklistSource::File(path) => Arc::new(FileBlacklistLoader::new(path.clone())),
        BlacklistSource::Etcd(cfg) => Arc::new(EtcdBlacklistLoader::new(cfg)?),
    };
    Ok(loader)
}
