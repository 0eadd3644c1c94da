//! Ferrous Blacklist Domain Layer
pub mod blacklist;
pub mod config;
pub mod errors;
pub mod lookup;
pub mod source;

pub use blacklist::Blacklist;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use lookup::{LookupKey, LookupVerdict};
pub use source::BlacklistSource;
