//! API info endpoint.

use reqwest::Client;
use secrecy::SecretString;
use serde_json::Value;

use crate::endpoints::{Endpoint, fetch};
use crate::error::Result;

/// Get the version and release date of the Hudu instance.
pub async fn get_api_info(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
) -> Result<Value> {
    let url = format!("{}/{}", base_url, Endpoint::ApiInfo);
    fetch(client, &url, api_key, &[]).await
}
