//! Asset endpoints.
//!
//! Assets are addressed through their company (`companies/{id}/assets/...`)
//! for everything except the general listing. A listing filtered by company
//! alone is served by the company-scoped endpoint instead.

use reqwest::Client;
use secrecy::SecretString;
use serde_json::Value;
use tracing::debug;

use crate::endpoints::query_params::QueryParams;
use crate::endpoints::{Endpoint, create, envelope, fetch, remove, replace};
use crate::error::Result;
use crate::models::{AssetParams, AssetQuery, CompanyAssetQuery};

/// Body key of asset writes.
const ASSET_KEY: &str = "asset";

fn company_assets_url(base_url: &str, company_id: u64) -> String {
    format!(
        "{}/{}/{}/{}",
        base_url,
        Endpoint::Companies,
        company_id,
        Endpoint::Assets
    )
}

fn company_asset_url(base_url: &str, company_id: u64, id: u64) -> String {
    format!("{}/{}", company_assets_url(base_url, company_id), id)
}

fn company_asset_action_url(base_url: &str, company_id: u64, id: u64, action: Endpoint) -> String {
    format!("{}/{}", company_asset_url(base_url, company_id, id), action)
}

/// Build the query parameters for a general asset listing.
pub fn asset_params(query: &AssetQuery) -> QueryParams {
    let mut params = QueryParams::new();
    crate::query_params! { params =>
        "company_id" => query.company_id,
        "id" => query.id,
        "name" => ref query.name,
        "primary_serial" => ref query.primary_serial,
        "asset_layout_id" => query.asset_layout_id,
        "page" => query.page,
        "archived" => query.archived,
        "page_size" => query.page_size,
    }
    params
}

/// Build the query parameters for a company-scoped asset listing.
pub fn company_asset_params(query: &CompanyAssetQuery) -> QueryParams {
    let mut params = QueryParams::new();
    crate::query_params! { params =>
        "company_id" => required query.company_id,
        "page" => query.page,
        "archived" => query.archived,
        "page_size" => query.page_size,
    }
    params
}

/// Resolve the URL and query parameters of an asset listing.
///
/// When `company_id` is the only filter, the company-scoped endpoint is used;
/// otherwise the general `assets` endpoint with every filter as a parameter.
pub fn assets_target(base_url: &str, query: &AssetQuery) -> (String, QueryParams) {
    match query.company_only() {
        Some(company_id) => {
            debug!(company_id, "Listing assets through the company-scoped endpoint");
            let company_query = CompanyAssetQuery::from_asset_query(company_id, query);
            (
                company_assets_url(base_url, company_id),
                company_asset_params(&company_query),
            )
        }
        None => (
            format!("{}/{}", base_url, Endpoint::Assets),
            asset_params(query),
        ),
    }
}

/// List assets.
pub async fn get_assets(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    query: &AssetQuery,
) -> Result<Value> {
    let (url, params) = assets_target(base_url, query);
    fetch(client, &url, api_key, &params).await
}

/// List the assets of one company.
pub async fn get_company_assets(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    query: &CompanyAssetQuery,
) -> Result<Value> {
    let url = company_assets_url(base_url, query.company_id);
    fetch(client, &url, api_key, &company_asset_params(query)).await
}

/// Get a single asset of a company.
pub async fn get_company_asset(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    company_id: u64,
    id: u64,
) -> Result<Value> {
    let url = company_asset_url(base_url, company_id, id);
    fetch(client, &url, api_key, &[]).await
}

/// Create an asset in a company.
pub async fn create_asset(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    company_id: u64,
    params: &AssetParams,
) -> Result<Value> {
    let body = envelope(ASSET_KEY, params)?;
    create(client, &company_assets_url(base_url, company_id), api_key, body).await
}

/// Update an asset of a company.
pub async fn update_asset(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    company_id: u64,
    id: u64,
    params: &AssetParams,
) -> Result<Value> {
    let body = envelope(ASSET_KEY, params)?;
    let url = company_asset_url(base_url, company_id, id);
    replace(client, &url, api_key, Some(body)).await
}

/// Delete an asset of a company.
pub async fn remove_asset(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    company_id: u64,
    id: u64,
) -> Result<Value> {
    remove(client, &company_asset_url(base_url, company_id, id), api_key).await
}

/// Archive an asset of a company.
pub async fn archive_asset(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    company_id: u64,
    id: u64,
) -> Result<Value> {
    let url = company_asset_action_url(base_url, company_id, id, Endpoint::Archive);
    replace(client, &url, api_key, None).await
}

/// Unarchive an asset of a company.
pub async fn unarchive_asset(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    company_id: u64,
    id: u64,
) -> Result<Value> {
    let url = company_asset_action_url(base_url, company_id, id, Endpoint::Unarchive);
    replace(client, &url, api_key, None).await
}
