//! Feed configuration
//!
//! Settings for the transport and the fetch loop, loaded from YAML. Every
//! field has a default, so an empty document is a valid configuration.
//!
//! ```yaml
//! endpoint: https://api.github.com/graphql
//! page_delay_ms: 200
//! max_items: 200
//! token_env: GITHUB_TOKEN
//! rate_limit:
//!   requests_per_second: 5
//!   burst_size: 1
//! ```

use crate::auth::EnvToken;
use crate::engine::{FetchConfig, DEFAULT_MAX_ITEMS};
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpTransportConfig, QuotaConfig, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Complete feed configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedConfig {
    /// GraphQL endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// User agent sent on every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Delay before each page request in milliseconds
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// Bulk fetch cap (0 = unlimited)
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Environment variable holding the API token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Optional request quota on the transport
    #[serde(default)]
    pub rate_limit: Option<QuotaConfig>,

    /// Extra headers for every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_page_delay_ms() -> u64 {
    200
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_token_env() -> String {
    EnvToken::DEFAULT_VAR.to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            page_delay_ms: default_page_delay_ms(),
            max_items: default_max_items(),
            timeout_secs: default_timeout_secs(),
            token_env: default_token_env(),
            rate_limit: None,
            headers: HashMap::new(),
        }
    }
}

impl FeedConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty map.
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.endpoint)
            .map_err(|e| Error::config(format!("Invalid endpoint '{}': {e}", self.endpoint)))?;

        if self.token_env.trim().is_empty() {
            return Err(Error::config("token_env cannot be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }

        if let Some(quota) = self.rate_limit {
            if quota.requests_per_second == 0 || quota.burst_size == 0 {
                return Err(Error::config(
                    "rate_limit requests_per_second and burst_size must be greater than zero",
                ));
            }
        }

        Ok(())
    }

    /// Fetch loop settings
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::new()
            .with_page_delay(Duration::from_millis(self.page_delay_ms))
            .with_max_items(self.max_items)
    }

    /// Transport settings
    pub fn transport_config(&self) -> HttpTransportConfig {
        let mut builder = HttpTransportConfig::builder()
            .endpoint(&self.endpoint)
            .user_agent(&self.user_agent)
            .timeout(Duration::from_secs(self.timeout_secs));

        if let Some(quota) = self.rate_limit {
            builder = builder.quota(quota);
        }

        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }

        builder.build()
    }

    /// Token provider reading `token_env`
    pub fn token_provider(&self) -> EnvToken {
        EnvToken::new(&self.token_env)
    }
}
