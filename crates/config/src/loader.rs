//! Configuration loader for explicit values, `.env` files and environment variables.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges explicit values with
//!   the `HUDU_*` environment variables.
//! - Enforce the `DOTENV_DISABLED` gate before touching `.env` files.
//!
//! Does NOT handle:
//! - Validation. Missing keys or domains are not errors here.
//!
//! Invariants / Assumptions:
//! - Explicit values take precedence over environment variables, regardless
//!   of call order.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - `api_version` falls back to `DEFAULT_API_VERSION`.

use secrecy::SecretString;
use tracing::debug;

use crate::constants::{
    DEFAULT_API_VERSION, ENV_API_KEY, ENV_API_VERSION, ENV_DOMAIN, ENV_DOTENV_DISABLED,
};
use crate::types::Config;

/// Configuration loader that resolves a [`Config`] once, at client construction.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    api_key: Option<SecretString>,
    domain: Option<String>,
    api_version: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not read
    /// (useful for testing).
    pub fn load_dotenv(self) -> Self {
        let disabled = std::env::var(ENV_DOTENV_DISABLED).ok();
        if !matches!(disabled.as_deref(), Some("true" | "1"))
            && let Ok(path) = dotenvy::dotenv()
        {
            debug!(path = %path.display(), "Loaded .env file");
        }
        self
    }

    /// Read an environment variable, returning None if unset, empty, or whitespace-only.
    pub fn env_var_or_none(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// Fill every value that was not set explicitly from the environment.
    pub fn from_env(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = Self::env_var_or_none(ENV_API_KEY).map(|key| SecretString::new(key.into()));
        }
        if self.domain.is_none() {
            self.domain = Self::env_var_or_none(ENV_DOMAIN);
        }
        if self.api_version.is_none() {
            self.api_version = Self::env_var_or_none(ENV_API_VERSION);
        }
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the instance domain.
    pub fn with_domain(mut self, domain: String) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Set the API version.
    pub fn with_api_version(mut self, version: String) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Build the final configuration.
    ///
    /// Never fails: an absent key or domain is carried through as `None`.
    pub fn build(self) -> Config {
        Config {
            api_key: self.api_key,
            domain: self.domain,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        }
    }
}
