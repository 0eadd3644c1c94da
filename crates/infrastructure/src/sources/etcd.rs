use async_trait::async_trait;
use ferrous_blacklist_application::ports::BlacklistLoader;
use ferrous_blacklist_domain::{config::EtcdConfig, DomainError};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

/// etcd v2 error code for a missing key.
const ETCD_KEY_NOT_FOUND: u64 = 100;

/// Reads the blacklist from a single etcd key over the v2 keys HTTP API.
pub struct EtcdBlacklistLoader {
    endpoints: Vec<String>,
    key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct KeysResponse {
    node: Node,
}

#[derive(Debug, Deserialize)]
struct Node {
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    dir: bool,
}

#[derive(Debug, Deserialize)]
struct KeysError {
    #[serde(rename = "errorCode")]
    error_code: u64,
    #[serde(default)]
    message: String,
}

impl EtcdBlacklistLoader {
    pub fn new(cfg: &EtcdConfig) -> Result<Self, DomainError> {
        let timeout = cfg.request_timeout();
        let client = reqwest::Client::builder()
            .user_agent("Ferrous-Blacklist/1.0 (etcd-loader)")
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;

        let endpoints = cfg
            .endpoints
            .iter()
            .map(|e| e.trim().trim_end_matches('/').to_string())
            .filter(|e| !e.is_empty())
            .collect::<Vec<_>>();

        if endpoints.is_empty() {
            return Err(DomainError::ConfigError(
                "No etcd endpoints configured".to_string(),
            ));
        }

        Ok(Self {
            endpoints,
            key: cfg.key.clone(),
            client,
        })
    }

    fn key_url(&self, endpoint: &str) -> String {
        format!("{}/v2/keys{}", endpoint, self.key)
    }

    async fn fetch(&self, endpoint: &str) -> Result<String, DomainError> {
        let url = self.key_url(endpoint);
        let unavailable = |e: reqwest::Error| DomainError::RemoteUnavailable {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(&url).send().await.map_err(unavailable)?;
        let status = response.status();
        let body = response.bytes().await.map_err(unavailable)?;

        if !status.is_success() {
            return Err(self.classify_error(status, &body));
        }

        let parsed: KeysResponse = serde_json::from_slice(&body)
            .map_err(|e| DomainError::RemoteProtocol(format!("invalid response from {}: {}", url, e)))?;

        if parsed.node.dir {
            return Err(DomainError::RemoteProtocol(format!(
                "{} is a directory",
                self.key
            )));
        }

        parsed
            .node
            .value
            .ok_or_else(|| DomainError::RemoteProtocol(format!("{} has no value", self.key)))
    }

    fn classify_error(&self, status: StatusCode, body: &[u8]) -> DomainError {
        match serde_json::from_slice::<KeysError>(body) {
            Ok(err) if err.error_code == ETCD_KEY_NOT_FOUND => {
                DomainError::KeyNotFound(self.key.clone())
            }
            Ok(err) => DomainError::RemoteProtocol(format!(
                "etcd error {}: {}",
                err.error_code, err.message
            )),
            Err(_) if status == StatusCode::NOT_FOUND => DomainError::KeyNotFound(self.key.clone()),
            Err(_) => DomainError::RemoteProtocol(format!("HTTP {}", status.as_u16())),
        }
    }
}

#[async_trait]
impl BlacklistLoader for EtcdBlacklistLoader {
    /// Endpoints are tried in order. Only transport failures fall through to
    /// the next endpoint; an answer from etcd, even an error, is final.
    async fn load_text(&self) -> Result<String, DomainError> {
        let mut last_error = None;

        for endpoint in &self.endpoints {
            match self.fetch(endpoint).await {
                Ok(text) => {
                    debug!(endpoint = %endpoint, key = %self.key, bytes = text.len(), "Blacklist fetched from etcd");
                    return Ok(text);
                }
                Err(e @ DomainError::RemoteUnavailable { .. }) => {
                    warn!(endpoint = %endpoint, error = %e, "etcd endpoint unavailable");
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            DomainError::ConfigError("No etcd endpoints configured".to_string())
        }))
    }

    fn describe(&self) -> String {
        format!("etcd:{}", self.key)
    }
}
