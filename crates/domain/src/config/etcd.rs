use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EtcdConfig {
    /// Client URLs tried in order until one answers.
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,

    /// Key holding the newline-delimited blacklist.
    #[serde(default = "default_key")]
    pub key: String,

    /// Per-request timeout, kept short so startup fails fast.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for EtcdConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            key: default_key(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl EtcdConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn default_endpoints() -> Vec<String> {
    vec!["http://127.0.0.1:2379".to_string()]
}

fn default_key() -> String {
    "/blacklist".to_string()
}

fn default_request_timeout_ms() -> u64 {
    1000
}
