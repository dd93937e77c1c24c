//! Resolved configuration types.
//!
//! Responsibilities:
//! - Hold the resolved API key, domain and API version.
//! - Derive the base URL from domain and version.
//!
//! Does NOT handle:
//! - Reading the environment (see `loader` module).
//! - Validating that the key or domain are present. A missing value surfaces
//!   later as an authentication or connection failure from the transport.

use secrecy::SecretString;

use crate::constants::DEFAULT_API_VERSION;

/// Resolved, immutable client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent in the `x-api-key` header.
    pub api_key: Option<SecretString>,
    /// Hudu instance domain, without scheme.
    pub domain: Option<String>,
    /// API version path segment, e.g. `v1`.
    pub api_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            domain: None,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl Config {
    /// Create a configuration from explicit values.
    pub fn new(
        api_key: Option<SecretString>,
        domain: Option<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            api_key,
            domain,
            api_version: api_version.into(),
        }
    }

    /// Base URL of the REST API: `https://{domain}/api/{api_version}`.
    ///
    /// An absent domain renders as an empty host.
    pub fn base_url(&self) -> String {
        format!(
            "https://{}/api/{}",
            self.domain.as_deref().unwrap_or_default(),
            self.api_version
        )
    }

    /// Whether an API key was resolved.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_template() {
        let config = Config::new(None, Some("docs.example.com".to_string()), "v2");
        assert_eq!(config.base_url(), "https://docs.example.com/api/v2");
    }

    #[test]
    fn test_default_version_is_v1() {
        let config = Config::default();
        assert_eq!(config.api_version, "v1");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_base_url_without_domain() {
        let config = Config::default();
        assert_eq!(config.base_url(), "https:///api/v1");
    }
}
