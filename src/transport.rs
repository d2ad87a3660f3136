//! Access transport - abstraction over how the access check is fetched
//!
//! The trait keeps the manager independent of the wire: the real
//! implementation speaks HTTP, tests substitute canned payloads or failures.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::LayoutConfig;

/// Fixed path of the access-check endpoint
pub const ACCESS_TEST_PATH: &str = "/cto/test-access";

/// Trait for fetching the access-check payload
///
/// Implementations return the parsed JSON body. Transport-level failures and
/// JSON-decode failures are deliberately not distinguished; both surface as a
/// single error to the caller.
#[async_trait]
pub trait AccessTransport: Send + Sync {
    /// Perform one access-check request and return the parsed body
    async fn fetch_access(&self) -> Result<Value>;

    /// Transport identifier for logging/debugging
    fn name(&self) -> &'static str;
}

/// HTTP transport backed by reqwest
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the configured base URL
    pub fn new(config: &LayoutConfig) -> Result<Self> {
        // No request timeout: a hung access check stays pending forever,
        // matching the page script this replaces.
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn access_url(&self) -> String {
        format!("{}{}", self.base_url, ACCESS_TEST_PATH)
    }
}

#[async_trait]
impl AccessTransport for HttpTransport {
    async fn fetch_access(&self) -> Result<Value> {
        let url = self.access_url();
        debug!("Requesting access check from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send access check request")?;

        // The status line is not inspected: any body that decodes as JSON
        // counts as a successful check.
        let payload = response
            .json::<Value>()
            .await
            .context("Failed to parse access check response as JSON")?;

        Ok(payload)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
