//! HTTP client for the node's account API.
mod types;

pub use types::*;

use async_trait::async_trait;

use crate::error::{Result, WalletError};

/// Seam between the import workflow and the node. Mocked in service
/// tests; implemented by [`NodeClient`] in production.
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn import_private_key(&self, request: &ImportRequest) -> Result<ImportReply>;
    async fn account_list(&self) -> Result<AccountListReply>;
}

pub struct NodeClient {
    http: reqwest::Client,
    base_url: String,
}

/// Reject plain-HTTP node URLs for non-loopback hosts unless
/// `allow_insecure` is set.
fn validate_node_url(url: &str, allow_insecure: bool) -> Result<()> {
    if url.starts_with("https://") {
        return Ok(());
    }
    if let Some(rest) = url.strip_prefix("http://") {
        let authority = rest.split('/').next().unwrap_or("");
        let loopback = authority.starts_with("127.0.0.1")
            || authority.starts_with("localhost")
            || authority.starts_with("[::1]");
        if allow_insecure || loopback {
            return Ok(());
        }
        return Err(WalletError::Validation(format!(
            "Refusing to connect over plain HTTP: {url}\nUse --insecure to allow unencrypted connections."
        )));
    }
    Err(WalletError::Validation(format!(
        "Invalid node URL scheme: {url}\nExpected an http:// or https:// URL."
    )))
}

impl NodeClient {
    pub fn new(base_url: &str, allow_insecure: bool) -> Result<Self> {
        validate_node_url(base_url, allow_insecure)?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| WalletError::Transport(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AccountApi for NodeClient {
    async fn import_private_key(&self, request: &ImportRequest) -> Result<ImportReply> {
        let url = format!("{}/account/import/pri", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| WalletError::Transport(format!("Import request failed: {e}")))?;
        response
            .json::<ImportReply>()
            .await
            .map_err(|e| WalletError::Transport(format!("Malformed import response: {e}")))
    }

    async fn account_list(&self) -> Result<AccountListReply> {
        let url = format!("{}/account", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| WalletError::Transport(format!("Account list request failed: {e}")))?;
        response
            .json::<AccountListReply>()
            .await
            .map_err(|e| WalletError::Transport(format!("Malformed account list response: {e}")))
    }
}

#[cfg(test)]
mod url_tests {
    use super::*;

    #[test]
    fn https_always_allowed() {
        validate_node_url("https://node.example.com/api", false).unwrap();
    }

    #[test]
    fn loopback_http_allowed() {
        validate_node_url("http://127.0.0.1:8001/api", false).unwrap();
        validate_node_url("http://localhost:8001/api", false).unwrap();
        validate_node_url("http://[::1]:8001/api", false).unwrap();
    }

    #[test]
    fn remote_http_needs_opt_in() {
        assert!(validate_node_url("http://node.example.com/api", false).is_err());
        validate_node_url("http://node.example.com/api", true).unwrap();
    }

    #[test]
    fn other_schemes_rejected() {
        assert!(validate_node_url("ws://127.0.0.1/api", false).is_err());
        assert!(validate_node_url("node.example.com", true).is_err());
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = NodeClient::new("http://127.0.0.1:8001/api/", false).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8001/api");
    }
}
