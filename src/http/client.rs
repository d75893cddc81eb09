//! HTTP transport for GraphQL requests
//!
//! Sends one request body per call and hands back the raw response body.
//! There are no retries: a failed send, a non-success status, or an
//! unreadable body is reported once and the caller decides what to do.

use super::quota::{QuotaConfig, RequestQuota};
use crate::auth::authorization_header;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Default GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// User agent sent on every request
pub const DEFAULT_USER_AGENT: &str = "GiHubQuery App";

/// Sends a request body and returns the response body
///
/// Implementations are treated as stateless and may be reused across
/// sequential fetches.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` with the given authorization token
    async fn send(&self, body: String, token: &str) -> Result<String>;
}

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Request quota shared by all requests through this transport
    pub quota: Option<QuotaConfig>,
    /// Extra headers for all requests
    pub default_headers: HashMap<String, String>,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            quota: None,
            default_headers: HashMap::new(),
        }
    }
}

impl HttpTransportConfig {
    /// Create a new config builder
    pub fn builder() -> HttpTransportConfigBuilder {
        HttpTransportConfigBuilder::default()
    }
}

/// Builder for HTTP transport config
#[derive(Default)]
pub struct HttpTransportConfigBuilder {
    config: HttpTransportConfig,
}

impl HttpTransportConfigBuilder {
    /// Set the endpoint URL
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the request quota
    pub fn quota(mut self, quota: QuotaConfig) -> Self {
        self.config.quota = Some(quota);
        self
    }

    /// Disable the request quota
    pub fn no_quota(mut self) -> Self {
        self.config.quota = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Build the config
    pub fn build(self) -> HttpTransportConfig {
        self.config
    }
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: Client,
    config: HttpTransportConfig,
    quota: Option<RequestQuota>,
}

impl HttpTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        url::Url::parse(&config.endpoint)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let quota = config.quota.as_ref().map(RequestQuota::new);

        Ok(Self {
            client,
            config,
            quota,
        })
    }

    /// Endpoint requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Check if a request quota is enabled
    pub fn has_quota(&self) -> bool {
        self.quota.is_some()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, body: String, token: &str) -> Result<String> {
        if let Some(ref quota) = self.quota {
            quota.acquire().await;
        }

        let mut req = self
            .client
            .post(&self.config.endpoint)
            .header(AUTHORIZATION, authorization_header(token))
            .header(CONTENT_TYPE, "application/json");

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.body(body).send().await.map_err(|e| {
            warn!("Request to {} failed: {e}", self.config.endpoint);
            Error::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Request to {} returned {}", self.config.endpoint, status);
            return Err(Error::http_status(status.as_u16(), body));
        }

        let text = response.text().await?;
        debug!(
            "POST {} succeeded ({} bytes)",
            self.config.endpoint,
            text.len()
        );
        Ok(text)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .field("has_quota", &self.quota.is_some())
            .finish_non_exhaustive()
    }
}
