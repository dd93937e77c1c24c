//! Client builder for constructing [`HuduClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Resolving unset values from the environment exactly once, at `build()`
//! - Normalizing the base URL (removing trailing slashes)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`HuduClient`] methods in the sibling modules)
//! - Validating the key or domain: a missing value surfaces as an
//!   authentication or connection error on the first request
//!
//! # Invariants
//! - Explicit values take precedence over `HUDU_*` environment variables
//! - A `Config` passed through `from_config` is used as-is, without reading the environment
//! - The base URL is always normalized to have no trailing slashes

use hudu_config::{Config, ConfigLoader};
use tracing::warn;

use crate::client::HuduClient;
use crate::error::Result;

/// Builder for creating a new [`HuduClient`].
///
/// # Example
///
/// ```rust,ignore
/// use hudu_client::HuduClient;
///
/// let client = HuduClient::builder()
///     .api_key("my-key".to_string())
///     .domain("docs.example.com".to_string())
///     .api_version("v1".to_string())
///     .build()?;
/// ```
#[derive(Default)]
pub struct HuduClientBuilder {
    api_key: Option<String>,
    domain: Option<String>,
    api_version: Option<String>,
    base_url: Option<String>,
    config: Option<Config>,
}

impl HuduClientBuilder {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key sent in the `x-api-key` header.
    pub fn api_key(mut self, key: String) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set the Hudu instance domain, without scheme (e.g. `docs.example.com`).
    pub fn domain(mut self, domain: String) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Set the API version path segment. Defaults to `v1`.
    pub fn api_version(mut self, version: String) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Override the base URL derived from domain and version.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Use an already resolved configuration.
    ///
    /// Explicit `api_key`, `domain` and `api_version` values set on this
    /// builder are ignored when a configuration is supplied.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.config = Some(config.clone());
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    fn resolve_config(
        config: Option<Config>,
        api_key: Option<String>,
        domain: Option<String>,
        api_version: Option<String>,
    ) -> Config {
        if let Some(config) = config {
            return config;
        }
        let mut loader = ConfigLoader::new();
        if let Some(key) = api_key {
            loader = loader.with_api_key(key);
        }
        if let Some(domain) = domain {
            loader = loader.with_domain(domain);
        }
        if let Some(version) = api_version {
            loader = loader.with_api_version(version);
        }
        loader.from_env().build()
    }

    /// Build the [`HuduClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<HuduClient> {
        let config =
            Self::resolve_config(self.config, self.api_key, self.domain, self.api_version);

        let base_url = match self.base_url {
            Some(url) => Self::normalize_base_url(url),
            None => {
                if config.domain.is_none() {
                    warn!("No Hudu domain configured; requests will fail to connect");
                }
                Self::normalize_base_url(config.base_url())
            }
        };
        if !config.has_api_key() {
            warn!("No Hudu API key configured; requests will be rejected by the server");
        }

        let http = reqwest::Client::builder().build()?;

        Ok(HuduClient {
            http,
            base_url,
            api_key: config.api_key,
        })
    }
}
