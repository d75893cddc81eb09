//! Token providers

use crate::error::{Error, Result};
use std::fmt;

/// Supplies an authorization token string
pub trait TokenProvider: Send + Sync {
    /// Current token
    fn token(&self) -> Result<String>;
}

/// Format the `Authorization` header value for a token
pub fn authorization_header(token: &str) -> String {
    format!("Token {token}")
}

/// A fixed token held in memory
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Create a new static token provider
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticToken")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Reads the token from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    /// Default variable name
    pub const DEFAULT_VAR: &'static str = "GITHUB_TOKEN";

    /// Create a provider reading the given variable
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable this provider reads
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

impl TokenProvider for EnvToken {
    fn token(&self) -> Result<String> {
        match std::env::var(&self.var) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(Error::missing_field(&self.var)),
        }
    }
}
