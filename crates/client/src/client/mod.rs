//! Main Hudu REST API client and API methods.
//!
//! This module provides the primary [`HuduClient`]. It holds the resolved
//! base URL and API key and forwards each call to [`crate::endpoints`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration resolution
//! - `activity_logs`: Activity log listing
//! - `api_info`: Instance version info
//! - `articles`: Article methods
//! - `asset_layouts`: Asset layout methods
//! - `assets`: Asset methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Reading the environment (done once by [`builder::HuduClientBuilder::build`])
//!
//! # Invariants
//! - The configuration is immutable after construction
//! - Every method issues exactly one HTTP request

pub mod builder;

// API method submodules
mod activity_logs;
mod api_info;
mod articles;
mod asset_layouts;
mod assets;

use secrecy::SecretString;

/// Hudu REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use hudu_client::HuduClient;
///
/// // Reads HUDU_API_KEY, HUDU_DOMAIN and HUDU_API_VERSION for anything not set here.
/// let client = HuduClient::builder()
///     .domain("docs.example.com".to_string())
///     .build()?;
///
/// let info = client.get_api_info().await?;
/// ```
#[derive(Debug)]
pub struct HuduClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: Option<SecretString>,
}

impl HuduClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing a [`HuduClient`].
    pub fn builder() -> builder::HuduClientBuilder {
        builder::HuduClientBuilder::new()
    }

    /// Create a client from optional explicit values, falling back to the
    /// `HUDU_*` environment variables and then to API version `v1`.
    pub fn new(
        api_key: Option<String>,
        domain: Option<String>,
        api_version: Option<String>,
    ) -> crate::error::Result<Self> {
        let mut builder = Self::builder();
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        if let Some(domain) = domain {
            builder = builder.domain(domain);
        }
        if let Some(version) = api_version {
            builder = builder.api_version(version);
        }
        builder.build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry an API key.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub(crate) fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }
}
