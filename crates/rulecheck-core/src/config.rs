//! Client configuration
//!
//! TOML-based configuration for the evaluation service endpoint and the
//! advisory page range shown to the user. Every field has a default, so an
//! empty file is a valid configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/api/check-results/check";

/// Top-level configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Evaluation service settings
    #[serde(default)]
    pub service: ServiceConfig,
    /// Advisory document constraints
    #[serde(default)]
    pub document: DocumentConfig,
}

impl ClientConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use rulecheck_core::config::ClientConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = ClientConfig::from_str(r#"
    ///     [service]
    ///     endpoint = "http://127.0.0.1:9000/check"
    /// "#)?;
    /// assert_eq!(config.service.endpoint, "http://127.0.0.1:9000/check");
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Replace the endpoint, e.g. from a command-line flag
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.service.endpoint = endpoint.into();
        self
    }
}

/// Evaluation service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Full URL the multipart check request is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Page range communicated to the user. Never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_min_pages")]
    pub min_pages: u32,
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            min_pages: default_min_pages(),
            max_pages: default_max_pages(),
        }
    }
}

impl DocumentConfig {
    pub fn contains(&self, pages: u32) -> bool {
        (self.min_pages..=self.max_pages).contains(&pages)
    }
}

fn default_min_pages() -> u32 {
    2
}

fn default_max_pages() -> u32 {
    10
}
