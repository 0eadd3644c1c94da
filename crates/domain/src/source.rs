use crate::config::EtcdConfig;
use std::fmt;
use std::path::PathBuf;

/// Where the blacklist is loaded from at startup.
///
/// Exactly one variant is selected per process; see
/// [`Config::blacklist_source`](crate::Config::blacklist_source).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlacklistSource {
    File(PathBuf),
    Etcd(EtcdConfig),
}

impl fmt::Display for BlacklistSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file:{}", path.display()),
            Self::Etcd(etcd) => write!(f, "etcd:{}", etcd.key),
        }
    }
}
