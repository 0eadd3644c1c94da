pub mod blacklist;
pub mod errors;
pub mod etcd;
pub mod logging;
pub mod root;
pub mod server;

pub use blacklist::BlacklistConfig;
pub use errors::ConfigError;
pub use etcd::EtcdConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
