use serde::{Deserialize, Serialize};

/// Selects the blacklist source. At most one of `file` and `etcd` may be set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BlacklistConfig {
    /// Path to a newline-delimited blacklist file. Empty means unset.
    #[serde(default)]
    pub file: Option<String>,

    /// Load the blacklist from etcd instead of a file.
    #[serde(default)]
    pub etcd: bool,
}

impl BlacklistConfig {
    pub fn file_path(&self) -> Option<&str> {
        self.file.as_deref().filter(|f| !f.is_empty())
    }
}
