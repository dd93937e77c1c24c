//! Asset layout endpoints.

use reqwest::Client;
use secrecy::SecretString;
use serde_json::Value;

use crate::endpoints::query_params::QueryParams;
use crate::endpoints::{Endpoint, create, envelope, fetch, replace};
use crate::error::Result;
use crate::models::{AssetLayoutParams, AssetLayoutQuery};

/// Body key of asset layout writes.
const ASSET_LAYOUT_KEY: &str = "asset_layout";

fn asset_layouts_url(base_url: &str) -> String {
    format!("{}/{}", base_url, Endpoint::AssetLayouts)
}

fn asset_layout_url(base_url: &str, id: u64) -> String {
    format!("{}/{}/{}", base_url, Endpoint::AssetLayouts, id)
}

/// Build the query parameters for an asset layout listing.
pub fn asset_layout_params(query: &AssetLayoutQuery) -> QueryParams {
    let mut params = QueryParams::new();
    crate::query_params! { params =>
        "name" => ref query.name,
        "page" => query.page,
    }
    params
}

/// List asset layouts.
pub async fn get_asset_layouts(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    query: &AssetLayoutQuery,
) -> Result<Value> {
    let params = asset_layout_params(query);
    fetch(client, &asset_layouts_url(base_url), api_key, &params).await
}

/// Get a single asset layout.
pub async fn get_asset_layout(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    id: u64,
) -> Result<Value> {
    fetch(client, &asset_layout_url(base_url, id), api_key, &[]).await
}

/// Create an asset layout together with its custom fields.
pub async fn create_asset_layout(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    params: &AssetLayoutParams,
) -> Result<Value> {
    let body = envelope(ASSET_LAYOUT_KEY, params)?;
    create(client, &asset_layouts_url(base_url), api_key, body).await
}

/// Update an asset layout; the field list replaces the existing one.
pub async fn update_asset_layout(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    id: u64,
    params: &AssetLayoutParams,
) -> Result<Value> {
    let body = envelope(ASSET_LAYOUT_KEY, params)?;
    replace(client, &asset_layout_url(base_url, id), api_key, Some(body)).await
}
