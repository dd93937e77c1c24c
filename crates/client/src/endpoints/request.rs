//! Transport primitives shared by every endpoint module.
//!
//! Four calls (`fetch`, `create`, `replace`, `remove`) map onto GET, POST,
//! PUT and DELETE. Each attaches the `x-api-key` header, sends the request
//! once and decodes the body as JSON.
//!
//! # What this module does NOT handle:
//! - Retries, rate limiting or timeouts beyond reqwest's defaults
//! - Status code inspection: an error response with a JSON body is returned
//!   to the caller like any other payload
//!
//! # Invariants
//! - Request bodies are serialized here, never by reqwest's `.json()`
//! - The API key header is marked sensitive and never logged

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Attach the API key header, if a key is configured.
fn authorize(builder: RequestBuilder, api_key: Option<&SecretString>) -> Result<RequestBuilder> {
    let Some(key) = api_key else {
        return Ok(builder);
    };
    let mut value =
        HeaderValue::from_str(key.expose_secret()).map_err(|_| ClientError::InvalidApiKey)?;
    value.set_sensitive(true);
    Ok(builder.header(API_KEY_HEADER, value))
}

fn with_body(builder: RequestBuilder, body: Option<String>) -> RequestBuilder {
    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(body),
        None => builder,
    }
}

/// Send the request and decode the response body as JSON.
async fn send(builder: RequestBuilder, method: &'static str, url: &str) -> Result<Value> {
    debug!(method, url, "Sending Hudu API request");
    let response = builder.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    debug!(method, url, status, bytes = body.len(), "Received Hudu API response");
    serde_json::from_str(&body).map_err(ClientError::Decode)
}

/// Wrap a payload under its resource key and serialize it:
/// `{"<resource>": <payload>}`.
pub fn envelope<T: Serialize>(resource: &str, payload: &T) -> Result<String> {
    let value = serde_json::to_value(payload).map_err(ClientError::Serialize)?;
    let mut body = Map::new();
    body.insert(resource.to_string(), value);
    serde_json::to_string(&Value::Object(body)).map_err(ClientError::Serialize)
}

/// GET `url` with the given query parameters.
pub async fn fetch(
    client: &Client,
    url: &str,
    api_key: Option<&SecretString>,
    params: &[(&str, String)],
) -> Result<Value> {
    let builder = authorize(client.get(url), api_key)?.query(params);
    send(builder, "GET", url).await
}

/// POST a pre-serialized JSON body to `url`.
pub async fn create(
    client: &Client,
    url: &str,
    api_key: Option<&SecretString>,
    body: String,
) -> Result<Value> {
    let builder = with_body(authorize(client.post(url), api_key)?, Some(body));
    send(builder, "POST", url).await
}

/// PUT to `url`, with or without a pre-serialized JSON body.
pub async fn replace(
    client: &Client,
    url: &str,
    api_key: Option<&SecretString>,
    body: Option<String>,
) -> Result<Value> {
    let builder = with_body(authorize(client.put(url), api_key)?, body);
    send(builder, "PUT", url).await
}

/// DELETE `url`.
pub async fn remove(client: &Client, url: &str, api_key: Option<&SecretString>) -> Result<Value> {
    let builder = authorize(client.delete(url), api_key)?;
    send(builder, "DELETE", url).await
}
